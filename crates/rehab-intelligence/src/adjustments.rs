// ABOUTME: Adjustment keys and the ordered-merge container filled by analysis stages
// ABOUTME: Later stages overwrite earlier values in place, keeping first-insertion order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rehab_core::models::DifficultyLevel;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Parameter of a future prescription that an analysis stage may adjust
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKey {
    /// Scales overall exercise intensity
    IntensityMultiplier,
    /// Scales rest time between sets
    RestTimeMultiplier,
    /// Scales prescribed sets
    SetsMultiplier,
    /// Scales prescribed reps
    RepsMultiplier,
    /// Moves the exercise to another difficulty tier
    DifficultyLevel,
}

impl AdjustmentKey {
    /// Wire name of the key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IntensityMultiplier => "intensity_multiplier",
            Self::RestTimeMultiplier => "rest_time_multiplier",
            Self::SetsMultiplier => "sets_multiplier",
            Self::RepsMultiplier => "reps_multiplier",
            Self::DifficultyLevel => "difficulty_level",
        }
    }
}

/// Value recorded for an adjustment key
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdjustmentValue {
    /// Scalar applied to the current prescription
    Multiplier(f64),
    /// Target difficulty tier
    Level(DifficultyLevel),
}

/// Adjustments accumulated across analysis stages
///
/// This is an ordered merge, not a union: when a later stage writes a key an
/// earlier stage already set, the later value wins and the key keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Adjustments {
    entries: Vec<(AdjustmentKey, AdjustmentValue)>,
}

impl Adjustments {
    /// Create an empty set of adjustments
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set a key, overwriting any previous value in place
    pub fn set(&mut self, key: AdjustmentKey, value: AdjustmentValue) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Builder-style multiplier insert
    #[must_use]
    pub fn with_multiplier(mut self, key: AdjustmentKey, multiplier: f64) -> Self {
        self.set(key, AdjustmentValue::Multiplier(multiplier));
        self
    }

    /// Builder-style difficulty tier insert
    #[must_use]
    pub fn with_level(mut self, level: DifficultyLevel) -> Self {
        self.set(AdjustmentKey::DifficultyLevel, AdjustmentValue::Level(level));
        self
    }

    /// Merge a later stage's adjustments into this one
    pub fn merge(&mut self, later: Self) {
        for (key, value) in later.entries {
            self.set(key, value);
        }
    }

    /// Value recorded for a key
    #[must_use]
    pub fn get(&self, key: AdjustmentKey) -> Option<AdjustmentValue> {
        self.entries
            .iter()
            .find_map(|(k, value)| (*k == key).then_some(*value))
    }

    /// Multiplier recorded for a key, if the key holds a multiplier
    #[must_use]
    pub fn multiplier(&self, key: AdjustmentKey) -> Option<f64> {
        match self.get(key)? {
            AdjustmentValue::Multiplier(value) => Some(value),
            AdjustmentValue::Level(_) => None,
        }
    }

    /// Difficulty tier recorded, if any
    #[must_use]
    pub fn difficulty_level(&self) -> Option<DifficultyLevel> {
        match self.get(AdjustmentKey::DifficultyLevel)? {
            AdjustmentValue::Level(level) => Some(level),
            AdjustmentValue::Multiplier(_) => None,
        }
    }

    /// Keys in first-insertion order
    pub fn keys(&self) -> impl Iterator<Item = AdjustmentKey> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Number of keys set
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Adjustments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_later_stage_overwrites_in_place() {
        let mut adjustments = Adjustments::new()
            .with_multiplier(AdjustmentKey::IntensityMultiplier, 0.7)
            .with_multiplier(AdjustmentKey::SetsMultiplier, 0.8)
            .with_level(DifficultyLevel::Beginner);

        adjustments.merge(
            Adjustments::new()
                .with_multiplier(AdjustmentKey::RepsMultiplier, 0.8)
                .with_multiplier(AdjustmentKey::SetsMultiplier, 0.7),
        );

        assert_eq!(adjustments.multiplier(AdjustmentKey::SetsMultiplier), Some(0.7));
        let keys: Vec<_> = adjustments.keys().collect();
        assert_eq!(
            keys,
            vec![
                AdjustmentKey::IntensityMultiplier,
                AdjustmentKey::SetsMultiplier,
                AdjustmentKey::DifficultyLevel,
                AdjustmentKey::RepsMultiplier,
            ]
        );
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let adjustments = Adjustments::new()
            .with_multiplier(AdjustmentKey::SetsMultiplier, 1.2)
            .with_level(DifficultyLevel::Intermediate);
        let json = serde_json::to_value(&adjustments).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"sets_multiplier": 1.2, "difficulty_level": "intermediate"})
        );
    }
}
