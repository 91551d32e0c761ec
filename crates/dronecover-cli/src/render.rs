//! SVG map of a finished mission.
//!
//! Targets are red dots (dark when covered), drones are blue dots with
//! their coverage circle outlined.

use dronecover::prelude::{MissionReport, FIELD_EXTENT};
use std::fmt::Write;

const DOT_RADIUS: f64 = 2.5;

pub fn svg_map(report: &MissionReport, scale: f64) -> String {
    let size = FIELD_EXTENT * scale;
    let mut svg = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="white"/>"#);

    for (i, target) in report.targets.iter().enumerate() {
        let fill = if report.is_covered(i) { "darkred" } else { "red" };
        let _ = writeln!(
            svg,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{DOT_RADIUS}" fill="{fill}"/>"#,
            target.x * scale,
            target.y * scale,
        );
    }

    let radius = report.radius.get() * scale;
    for drone in &report.drones {
        let (cx, cy) = (drone.x * scale, drone.y * scale);
        let _ = writeln!(
            svg,
            r#"  <circle cx="{cx:.2}" cy="{cy:.2}" r="{radius:.2}" fill="none" stroke="blue"/>"#
        );
        let _ = writeln!(
            svg,
            r#"  <circle cx="{cx:.2}" cy="{cy:.2}" r="{DOT_RADIUS}" fill="blue"/>"#
        );
    }

    svg.push_str("</svg>\n");
    svg
}
