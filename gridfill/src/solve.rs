use std::path::Path;

use anyhow::{Result, bail};
use itertools::Itertools;
use log::{error, info, warn};
use maxrec::PackingError;
use maxrec::entities::PackingResult;
use maxrec::io;
use maxrec::io::ext_repr::ExtPackingInput;
use maxrec::io::svg::result_to_svg;
use maxrec::packing::{PackingConfig, pack_batch};
use thousands::Separable;

use crate::EPOCH;
use crate::config::GridFillConfig;
use crate::io::output::GridFillOutput;

/// Packs every instance, in parallel.
/// Instances are grouped by their effective engine configuration, the i-th result belongs to the i-th instance.
pub fn solve_all(
    instances: &[ExtPackingInput],
    config: &GridFillConfig,
) -> Vec<Result<PackingResult, PackingError>> {
    let imported = instances
        .iter()
        .map(|ext| io::import(ext, config.packing))
        .collect_vec();

    let groups = imported
        .iter()
        .enumerate()
        .into_group_map_by(|(_, imp)| imp.config.allow_rotation);

    let mut results = vec![None; imported.len()];
    for (allow_rotation, members) in groups {
        let packing_config = PackingConfig {
            allow_rotation,
            ..config.packing
        };
        let inputs = members.iter().map(|(_, imp)| imp.input).collect_vec();
        for ((i, _), result) in members.iter().zip(pack_batch(&inputs, &packing_config)) {
            results[*i] = Some(result);
        }
    }

    debug_assert!(results.iter().all(Option::is_some));
    results.into_iter().flatten().collect()
}

/// Solves all `instances` and writes a JSON solution and an SVG rendering for each of them to `output_folder`.
/// Files are named after `input_stem`, suffixed with the index of the instance when there is more than one.
/// Returns the number of solved instances. Fails only if none of the instances could be solved.
pub fn solve_and_write(
    instances: &[ExtPackingInput],
    config: &GridFillConfig,
    input_stem: &str,
    output_folder: &Path,
) -> Result<usize> {
    if instances.is_empty() {
        warn!("[GF] no instances to solve");
        return Ok(0);
    }

    let results = solve_all(instances, config);
    let mut n_solved = 0;

    for (i, (ext_instance, result)) in instances.iter().zip(results).enumerate() {
        let name = match instances.len() {
            1 => input_stem.to_owned(),
            _ => format!("{input_stem}_{i}"),
        };
        let result = match result {
            Ok(result) => result,
            Err(e) => {
                error!("[GF] instance {name} could not be solved: {e}");
                continue;
            }
        };

        info!(
            "[GF] instance {name}: {} pieces ({} x {}, {}), yield {:.3}%",
            result.count().separate_with_commas(),
            result.cols,
            result.rows,
            result.orientation,
            result.yield_ratio * 100.0
        );

        {
            let output = GridFillOutput {
                instance: ext_instance.clone(),
                solution: io::export(&result),
                config: *config,
            };
            let solution_path = output_folder.join(format!("sol_{name}.json"));
            crate::io::write_json(&output, &solution_path)?;
        }

        {
            let title = ext_instance.name.as_deref().unwrap_or(&name);
            let svg = result_to_svg(&result, config.svg_draw_options, title);
            let svg_path = output_folder.join(format!("sol_{name}.svg"));
            crate::io::write_svg(&svg, &svg_path)?;
        }

        n_solved += 1;
    }

    if n_solved == 0 {
        bail!("none of the {} instances could be solved", instances.len());
    }

    info!(
        "[GF] solved {}/{} instances in {:.3}s",
        n_solved,
        instances.len(),
        EPOCH.elapsed().as_secs_f64()
    );
    Ok(n_solved)
}
