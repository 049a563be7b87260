use crate::entities::{Orientation, PackingResult};
use crate::geometry::Rect;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Definitions, Group, Text, Title, Use};

/// Draws the sheet and every placement of `result`.
/// Pieces are defined once per orientation and referenced with `<use>` elements.
pub fn result_to_svg(result: &PackingResult, options: SvgDrawOptions, title: &str) -> Document {
    let sheet = result.input.sheet;
    let sheet_bbox = sheet.bbox();
    let theme = &options.theme;

    let min_dim = f64::min(sheet.width, sheet.height);
    let stroke_width = min_dim * 0.001 * theme.stroke_width_multiplier;
    let font_size = min_dim * 0.025;

    //5% of padding on every side, plus room for the label on top
    let pad = 0.05 * f64::max(sheet.width, sheet.height);
    let label_room = match options.draw_labels {
        true => 2.0 * font_size,
        false => 0.0,
    };
    let vbox_svg = (
        -pad as f32,
        (-pad - label_room) as f32,
        (sheet.width + 2.0 * pad) as f32,
        (sheet.height + 2.0 * pad + label_room) as f32,
    );

    let sheet_group = {
        let title = Title::new(format!(
            "sheet, width: {:.3}, height: {:.3}",
            sheet.width, sheet.height
        ));
        let mut sheet_group = Group::new().set("id", "sheet").add(
            svg_util::data_to_path(
                svg_util::aa_rect_data(sheet_bbox),
                &[
                    ("fill", &*format!("{}", theme.sheet_fill)),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            )
            .add(title),
        );

        let margin = result.input.margin;
        if options.draw_margin && margin > 0.0 {
            if let Some(usable) = sheet_bbox.shrink_by(margin) {
                sheet_group = sheet_group.add(
                    svg_util::data_to_path(
                        svg_util::aa_rect_data(usable),
                        &[
                            ("fill", "none"),
                            ("stroke", &*format!("{}", theme.margin_stroke)),
                            ("stroke-width", &*format!("{}", stroke_width)),
                            (
                                "stroke-dasharray",
                                &*format!("{} {}", 2.0 * stroke_width, 2.0 * stroke_width),
                            ),
                        ],
                    )
                    .add(Title::new(format!("margin: {margin:.3}"))),
                );
            }
        }
        sheet_group
    };

    let pieces_group = {
        //define the piece once per orientation, anchored at the origin
        let mut piece_defs = Definitions::new();
        for orientation in Orientation::ALL {
            let (w, h) = result.input.piece.footprint(orientation);
            let fill = match orientation {
                Orientation::Normal => theme.piece_fill,
                Orientation::Rotated => theme.rotated_piece_fill,
            };
            let stroke = svg_util::change_brightness(fill, 0.5);
            let shape = Rect {
                x_min: 0.0,
                y_min: 0.0,
                x_max: w,
                y_max: h,
            };
            piece_defs = piece_defs.add(
                Group::new()
                    .set("id", format!("piece_{orientation}"))
                    .add(svg_util::data_to_path(
                        svg_util::aa_rect_data(shape),
                        &[
                            ("fill", &*format!("{fill}")),
                            ("stroke", &*format!("{stroke}")),
                            ("stroke-width", &*format!("{}", stroke_width)),
                            ("opacity", "0.9"),
                        ],
                    )),
            );
        }

        let mut pieces_group = Group::new().set("id", "pieces").add(piece_defs);
        for (i, p) in result.placements.iter().enumerate() {
            let title = Title::new(format!(
                "piece {i}, x: {:.3}, y: {:.3}, {}",
                p.x,
                p.y,
                p.orientation()
            ));
            pieces_group = pieces_group.add(
                Use::new()
                    .set("transform", format!("translate({} {})", p.x, p.y))
                    .set("xlink:href", format!("#piece_{}", p.orientation()))
                    .add(title),
            );
        }
        pieces_group
    };

    let mut document = Document::new()
        .set("viewBox", vbox_svg)
        .set("xmlns:xlink", "http://www.w3.org/1999/xlink")
        .add(sheet_group)
        .add(pieces_group);

    if options.draw_labels {
        let label_content = format!(
            "width: {:.3} | height: {:.3} | pieces: {} ({} x {}, {}) | yield: {:.3}% | {}",
            sheet.width,
            sheet.height,
            result.count(),
            result.cols,
            result.rows,
            result.orientation,
            result.yield_ratio * 100.0,
            title,
        );
        let label = Text::new(label_content)
            .set("x", 0.0f32)
            .set("y", (-0.5 * font_size) as f32)
            .set("font-size", font_size as f32)
            .set("font-family", "monospace")
            .set("font-weight", "500");
        document = document.add(label);
    }

    document
}
