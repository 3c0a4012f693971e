//! Map annotation reconciliation
//!
//! The map never edits its own copy of the pins. On every `PinEvent` it
//! diffs what it currently displays against `PinStore::snapshot()` and
//! applies the resulting `AnnotationPlan`.

use crate::models::{GeoPoint, SavedPin};

/// A marker as the map displays it
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub point: GeoPoint,
    pub title: String,
    pub subtitle: String,
}

impl From<&SavedPin> for Annotation {
    fn from(pin: &SavedPin) -> Self {
        Self {
            point: pin.point,
            title: pin.title().to_string(),
            subtitle: pin.locality().to_string(),
        }
    }
}

/// Changes that bring the displayed annotations in line with a snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationPlan {
    /// New markers, in save order
    pub add: Vec<Annotation>,
    /// Markers whose pin no longer exists
    pub remove: Vec<GeoPoint>,
    /// Markers whose title or subtitle changed
    pub update: Vec<Annotation>,
}

impl AnnotationPlan {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty() && self.update.is_empty()
    }

    /// Apply the plan to a displayed list
    pub fn apply(&self, displayed: &mut Vec<Annotation>) {
        displayed.retain(|a| !self.remove.contains(&a.point));
        for updated in &self.update {
            if let Some(existing) = displayed.iter_mut().find(|a| a.point == updated.point) {
                *existing = updated.clone();
            }
        }
        displayed.extend(self.add.iter().cloned());
    }
}

/// Diff `displayed` against `snapshot` by point equality
#[must_use]
pub fn plan_annotations(displayed: &[Annotation], snapshot: &[SavedPin]) -> AnnotationPlan {
    let mut plan = AnnotationPlan::default();

    for pin in snapshot {
        let wanted = Annotation::from(pin);
        match displayed.iter().find(|a| a.point == pin.point) {
            None => plan.add.push(wanted),
            Some(current) if *current != wanted => plan.update.push(wanted),
            Some(_) => {}
        }
    }

    plan.remove = displayed
        .iter()
        .filter(|a| !snapshot.iter().any(|pin| pin.point == a.point))
        .map(|a| a.point)
        .collect();

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PLACEHOLDER_TEXT, PinMetadata};

    fn pin(lat: f64, lon: f64, metadata: Option<(&str, &str)>) -> SavedPin {
        SavedPin {
            point: GeoPoint::new(lat, lon).unwrap(),
            metadata: metadata.map(|(t, l)| PinMetadata::new(t, l)),
        }
    }

    fn annotations(snapshot: &[SavedPin]) -> Vec<Annotation> {
        snapshot.iter().map(Annotation::from).collect()
    }

    #[test]
    fn test_empty_display_adds_everything() {
        let snapshot = vec![pin(1.0, 1.0, None), pin(2.0, 2.0, Some(("A", "B")))];
        let plan = plan_annotations(&[], &snapshot);

        assert_eq!(plan.add, annotations(&snapshot));
        assert!(plan.remove.is_empty());
        assert!(plan.update.is_empty());
        assert_eq!(plan.add[0].title, PLACEHOLDER_TEXT);
    }

    #[test]
    fn test_in_sync_plan_is_empty() {
        let snapshot = vec![pin(1.0, 1.0, Some(("A", "B")))];
        let plan = plan_annotations(&annotations(&snapshot), &snapshot);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_removed_and_renamed_pins() {
        let before = vec![pin(1.0, 1.0, None), pin(2.0, 2.0, None), pin(3.0, 3.0, None)];
        let after = vec![
            pin(1.0, 1.0, Some(("Townsville", "RegionX"))),
            pin(3.0, 3.0, None),
            pin(4.0, 4.0, None),
        ];

        let mut displayed = annotations(&before);
        let plan = plan_annotations(&displayed, &after);

        assert_eq!(plan.remove, vec![GeoPoint::new(2.0, 2.0).unwrap()]);
        assert_eq!(plan.update.len(), 1);
        assert_eq!(plan.update[0].title, "Townsville");
        assert_eq!(plan.add.len(), 1);
        assert_eq!(plan.add[0].point, GeoPoint::new(4.0, 4.0).unwrap());

        plan.apply(&mut displayed);
        assert_eq!(displayed, annotations(&after));
        assert!(plan_annotations(&displayed, &after).is_empty());
    }
}
