//! Standalone SVG document for a [`PathArtifact`].
//!
//! The animation descriptor becomes a SMIL `<animate>` on the path's
//! `stroke-dasharray`, which browsers and most headless renderers play
//! without any script.

use std::fmt::Write;

use super::PathArtifact;
use crate::anim::{AnimationDescriptor, Repeat};
use crate::config::SvgStyle;

/// Escape the five XML special characters for attribute values and text.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

fn write_animate(out: &mut String, animation: &AnimationDescriptor) {
    let _ = write!(
        out,
        r#"  <animate attributeName="{}" from="{}" to="{}" dur="{}s""#,
        animation.attribute,
        animation.start_dasharray(),
        animation.end_dasharray(),
        animation.duration_secs,
    );
    if let Some([x1, y1, x2, y2]) = animation.easing.key_splines() {
        let _ = write!(
            out,
            r#" calcMode="spline" keyTimes="0;1" keySplines="{x1} {y1} {x2} {y2}""#
        );
    }
    match animation.repeat {
        Repeat::Indefinite => out.push_str(r#" repeatCount="indefinite""#),
        Repeat::Once => out.push_str(r#" fill="freeze""#),
    }
    out.push_str(" />\n");
}

pub fn render(artifact: &PathArtifact, style: &SvgStyle, title: Option<&str>) -> String {
    let mut out = String::new();
    let width = artifact.canvas.width;
    let height = artifact.canvas.height;
    let padding = i64::from(style.padding);

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="{} {} {} {}">"#,
        -padding,
        -padding,
        i64::from(width) + 2 * padding,
        i64::from(height) + 2 * padding,
    );
    if let Some(title) = title {
        let _ = writeln!(out, "<title>{}</title>", xml_escape(title));
    }
    let _ = writeln!(
        out,
        r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round">"#,
        artifact.path_data(),
        xml_escape(&style.stroke_color),
        artifact.stroke_width,
    );
    write_animate(&mut out, &artifact.animation);
    out.push_str("</path>\n</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use geo_types::LineString;

    use super::*;
    use crate::anim::Easing;
    use crate::types::{CanvasSpec, PlanarPath};

    fn artifact(easing: Easing, repeat: Repeat) -> PathArtifact {
        PathArtifact {
            canvas: CanvasSpec {
                width: 400,
                height: 300,
            },
            path: PlanarPath::new(LineString::from(vec![(0.0, 300.0), (400.0, 0.0)])),
            path_length: 500.0,
            stroke_width: 1.5,
            animation: AnimationDescriptor::draw_path(500.0, 30.0, easing, repeat),
        }
    }

    #[test]
    fn renders_sized_document_with_animated_path() {
        let svg = render(
            &artifact(Easing::Linear, Repeat::Indefinite),
            &SvgStyle::default(),
            None,
        );
        assert_eq!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="300" viewBox="-20 -20 440 340">
<path d="M 0 300 L 400 0" fill="none" stroke="red" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
  <animate attributeName="stroke-dasharray" from="0 500" to="500 500" dur="30s" repeatCount="indefinite" />
</path>
</svg>
"#
        );
    }

    #[test]
    fn zero_padding_matches_canvas() {
        let style = SvgStyle {
            padding: 0,
            ..SvgStyle::default()
        };
        let svg = render(&artifact(Easing::Linear, Repeat::Indefinite), &style, None);
        assert!(svg.contains(r#"viewBox="0 0 400 300""#));
    }

    #[test]
    fn eased_single_play() {
        let svg = render(
            &artifact(Easing::EaseInOut, Repeat::Once),
            &SvgStyle::default(),
            None,
        );
        assert!(svg.contains(r#"calcMode="spline" keyTimes="0;1" keySplines="0.42 0 0.58 1""#));
        assert!(svg.contains(r#"fill="freeze""#));
        assert!(!svg.contains("repeatCount"));
    }

    #[test]
    fn title_and_color_are_escaped() {
        let style = SvgStyle {
            stroke_color: r##"#f00" onload="x"##.to_string(),
            ..SvgStyle::default()
        };
        let svg = render(
            &artifact(Easing::Linear, Repeat::Indefinite),
            &style,
            Some("Hills & <Lakes>"),
        );
        assert!(svg.contains("<title>Hills &amp; &lt;Lakes&gt;</title>"));
        assert!(svg.contains(r##"stroke="#f00&quot; onload=&quot;x""##));
    }
}
