//! TCX file generation from samples.
//!
//! Generates Training Center XML v2 with a single activity holding a single
//! lap, indented three spaces per level.

use std::path::Path;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime};
use tracing::info;

use crate::error::SynthError;
use crate::models::{ActivityMetadata, Sample};

const TCX_NAMESPACE: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2";
const TCX_SCHEMA: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabasev2.xsd";
const ACTIVITY_EXTENSION_NAMESPACE: &str = "http://www.garmin.com/xmlschemas/ActivityExtension/v2";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const INDENT: &str = "   ";

/// Whole-second UTC timestamp, e.g. `2024-05-01T10:03:32Z`.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");

/// Formats a timestamp the way TCX `Time` and `Id` elements carry it.
///
/// Sub-second precision is truncated, not rounded.
pub fn format_timestamp(ts: OffsetDateTime) -> Result<String, SynthError> {
    Ok(ts.to_offset(time::UtcOffset::UTC).format(TIMESTAMP_FORMAT)?)
}

/// Renders a TCX document for one activity.
///
/// Trackpoint times are `metadata.start + sample.elapsed_seconds`; lap totals
/// come from `metadata`, not from the samples.
pub fn emit_tcx(metadata: &ActivityMetadata, samples: &[Sample]) -> Result<String, SynthError> {
    let start = format_timestamp(metadata.start)?;
    let mut xml = String::with_capacity(512 + samples.len() * 400);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(
        r#"<TrainingCenterDatabase xmlns="{TCX_NAMESPACE}" xmlns:xsi="{XSI_NAMESPACE}" xsi:schemaLocation="{TCX_NAMESPACE} {TCX_SCHEMA}">"#
    ));
    xml.push('\n');

    open(&mut xml, 1, "Activities");
    xml.push_str(&format!(
        "{}<Activity Sport=\"{}\">\n",
        INDENT.repeat(2),
        metadata.sport.as_str()
    ));
    leaf(&mut xml, 3, "Id", &start);

    xml.push_str(&format!(
        "{}<Lap StartTime=\"{}\">\n",
        INDENT.repeat(3),
        start
    ));
    leaf(&mut xml, 4, "TotalTimeSeconds", &metadata.total_time_seconds.to_string());
    leaf(&mut xml, 4, "DistanceMeters", &metadata.distance_meters.to_string());
    leaf(&mut xml, 4, "Calories", &metadata.calories.to_string());

    open(&mut xml, 4, "Extensions");
    xml.push_str(&format!(
        "{}<TPX xmlns=\"{ACTIVITY_EXTENSION_NAMESPACE}\">\n",
        INDENT.repeat(5)
    ));
    leaf(&mut xml, 6, "Speed", &metadata.average_speed().to_string());
    close(&mut xml, 5, "TPX");
    close(&mut xml, 4, "Extensions");

    leaf(&mut xml, 4, "Intensity", "Active");
    leaf(&mut xml, 4, "TriggerMethod", metadata.trigger_method.as_str());

    open(&mut xml, 4, "Track");
    for sample in samples {
        let ts = metadata.start + Duration::seconds_f64(sample.elapsed_seconds);

        open(&mut xml, 5, "Trackpoint");
        leaf(&mut xml, 6, "Time", &format_timestamp(ts)?);
        open(&mut xml, 6, "Position");
        leaf(&mut xml, 7, "LatitudeDegrees", &sample.lat.to_string());
        leaf(&mut xml, 7, "LongitudeDegrees", &sample.lon.to_string());
        close(&mut xml, 6, "Position");
        leaf(&mut xml, 6, "AltitudeMeters", &sample.altitude.to_string());
        leaf(&mut xml, 6, "DistanceMeters", &sample.distance_meters.to_string());
        close(&mut xml, 5, "Trackpoint");
    }
    close(&mut xml, 4, "Track");

    close(&mut xml, 3, "Lap");
    close(&mut xml, 2, "Activity");
    close(&mut xml, 1, "Activities");
    xml.push_str("</TrainingCenterDatabase>\n");

    Ok(xml)
}

/// Writes a rendered document, creating parent directories as needed.
pub fn write_file(path: impl AsRef<Path>, document: &str) -> Result<(), SynthError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, document)?;
    info!("Wrote {} ({} bytes)", path.display(), document.len());
    Ok(())
}

fn open(xml: &mut String, depth: usize, name: &str) {
    xml.push_str(&format!("{}<{}>\n", INDENT.repeat(depth), name));
}

fn close(xml: &mut String, depth: usize, name: &str) {
    xml.push_str(&format!("{}</{}>\n", INDENT.repeat(depth), name));
}

fn leaf(xml: &mut String, depth: usize, name: &str, text: &str) {
    xml.push_str(&format!(
        "{}<{name}>{}</{name}>\n",
        INDENT.repeat(depth),
        escape_xml(text)
    ));
}

/// Escapes XML special characters in a string.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn metadata() -> ActivityMetadata {
        ActivityMetadata::running(datetime!(2024-05-01 10:03:32 UTC), 1579.0, 3020.0, 288)
    }

    fn samples() -> Vec<Sample> {
        vec![
            Sample {
                lat: 39.084861,
                lon: 121.808194,
                altitude: 96.0,
                elapsed_seconds: 0.0,
                distance_meters: 0.0,
            },
            Sample {
                lat: 39.0849,
                lon: 121.80816,
                altitude: 96.5,
                elapsed_seconds: 2.056,
                distance_meters: 5.25,
            },
            Sample {
                lat: 39.08494,
                lon: 121.80813,
                altitude: 97.0,
                elapsed_seconds: 4.112,
                distance_meters: 10.5,
            },
        ]
    }

    #[test]
    fn test_emit_tcx_structure() {
        let xml = emit_tcx(&metadata(), &samples()).unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2""#));
        assert!(xml.contains(r#"<Activity Sport="Running">"#));
        assert!(xml.contains("<Id>2024-05-01T10:03:32Z</Id>"));
        assert!(xml.contains(r#"<Lap StartTime="2024-05-01T10:03:32Z">"#));
        assert!(xml.contains("<TotalTimeSeconds>1579</TotalTimeSeconds>"));
        assert!(xml.contains("<DistanceMeters>3020</DistanceMeters>"));
        assert!(xml.contains("<Calories>288</Calories>"));
        assert!(xml.contains(&format!("<Speed>{}</Speed>", 3020.0_f64 / 1579.0)));
        assert!(xml.contains("<Intensity>Active</Intensity>"));
        assert!(xml.contains("<TriggerMethod>Manual</TriggerMethod>"));
        assert_eq!(xml.matches("<Trackpoint>").count(), 3);
        assert!(xml.trim_end().ends_with("</TrainingCenterDatabase>"));
    }

    #[test]
    fn test_trackpoint_times_truncate_seconds() {
        let xml = emit_tcx(&metadata(), &samples()).unwrap();

        // 2.056s and 4.112s after start
        assert!(xml.contains("<Time>2024-05-01T10:03:32Z</Time>"));
        assert!(xml.contains("<Time>2024-05-01T10:03:34Z</Time>"));
        assert!(xml.contains("<Time>2024-05-01T10:03:36Z</Time>"));
    }

    #[test]
    fn test_trackpoint_values() {
        let xml = emit_tcx(&metadata(), &samples()).unwrap();

        assert!(xml.contains("<LatitudeDegrees>39.084861</LatitudeDegrees>"));
        assert!(xml.contains("<LongitudeDegrees>121.808194</LongitudeDegrees>"));
        assert!(xml.contains("<AltitudeMeters>96.5</AltitudeMeters>"));
        assert!(xml.contains("<DistanceMeters>10.5</DistanceMeters>"));
    }

    #[test]
    fn test_trackpoint_indentation() {
        let xml = emit_tcx(&metadata(), &samples()).unwrap();
        assert!(xml.contains("\n               <Trackpoint>\n"));
        assert!(xml.contains("\n                     <LatitudeDegrees>"));
    }

    #[test]
    fn test_every_line_terminated() {
        let xml = emit_tcx(&metadata(), &samples()).unwrap();
        assert!(xml.ends_with("</TrainingCenterDatabase>\n"));
        assert!(xml.contains("\n      <Activity Sport=\"Running\">\n         <Id>"));
        assert!(xml.contains("\n               <TPX xmlns=\"http://www.garmin.com/xmlschemas/ActivityExtension/v2\">\n"));
        assert!(xml.lines().all(|line| line.trim_start().starts_with('<')));
        assert_eq!(xml.lines().count(), 19 + 3 * 9 + 5);
    }

    #[test]
    fn test_empty_track() {
        let xml = emit_tcx(&metadata(), &[]).unwrap();
        assert!(xml.contains("<Track>"));
        assert!(!xml.contains("<Trackpoint>"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a & <b> \"c\""), "a &amp; &lt;b&gt; &quot;c&quot;");
    }

    #[test]
    fn test_write_file_creates_dirs() {
        let dir = std::env::temp_dir().join("track_synth_tcx_test");
        let path = dir.join("nested").join("5_1.tcx");
        let xml = emit_tcx(&metadata(), &samples()).unwrap();

        write_file(&path, &xml).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), xml);

        // Clean up
        std::fs::remove_dir_all(dir).ok();
    }
}
