use crate::metadata::ParsedMetadata;
use crate::metadata::models::MetadataEvent;
use log::{debug, warn};

/// Merges cue points, loops, labels and label ranges into time-sorted markers and regions.
///
/// Each cue id becomes one event. A loop end makes it a region ending at the loop end; failing
/// that an `ltxt` range makes it a region of the range's length; otherwise it is a marker.
/// Markers without a label of their own take the next unused label whose id has no cue point,
/// in the order those labels were first seen.
///
/// A file with cue points but no labels, ranges or loops yields nothing.
pub fn resolve(metadata: ParsedMetadata) -> Vec<MetadataEvent> {
    if !metadata.has_annotations() {
        debug!(
            "No labels, label ranges or loops found, ignoring {} cue point(s)",
            metadata.cue_points.len()
        );
        return Vec::new();
    }

    let rate = f64::from(metadata.sample_rate);

    let mut cues: Vec<(u32, u32)> = metadata
        .cue_points
        .iter()
        .map(|(&cue_id, &offset)| (cue_id, offset))
        .collect();
    cues.sort_by_key(|&(_, offset)| offset);

    let mut orphan_labels = metadata
        .labels
        .iter()
        .filter(|(id, _)| !metadata.cue_points.contains_key(*id))
        .map(|(_, text)| text.as_str());

    let mut events = Vec::with_capacity(cues.len());

    for (cue_id, offset) in cues {
        let position = f64::from(offset) / rate;
        let label = metadata
            .labels
            .get(&cue_id)
            .map(String::as_str)
            .unwrap_or("");

        let event = if let Some(&loop_end) = metadata.loop_ends.get(&cue_id) {
            let mut end = f64::from(loop_end) / rate;
            if end < position {
                warn!(
                    "Loop for cue {} ends at sample {} before its start at sample {}, treating it as zero length",
                    cue_id, loop_end, offset
                );
                end = position;
            }
            MetadataEvent::region(cue_id, position, end, label)
        } else if let Some(range) = metadata.label_ranges.get(&cue_id) {
            let end = position + f64::from(range.sample_length) / rate;
            let label = if range.text.is_empty() {
                label
            } else {
                range.text.as_str()
            };
            MetadataEvent::region(cue_id, position, end, label)
        } else if label.is_empty() {
            MetadataEvent::marker(cue_id, position, orphan_labels.next().unwrap_or(""))
        } else {
            MetadataEvent::marker(cue_id, position, label)
        };

        events.push(event);
    }

    events.sort_by(|a, b| a.position.total_cmp(&b.position));
    for (i, event) in events.iter_mut().enumerate() {
        event.index = i + 1;
    }

    events
}
