use crate::data::LEVEL_COUNT;
use crate::model::SkillTag;
use log::warn;
use std::collections::BTreeSet;

/// Umbrales de retos completados que desbloquean cada habilidad
const SKILL_THRESHOLDS: [(usize, SkillTag); 4] = [
    (3, SkillTag::Observation),
    (6, SkillTag::Memory),
    (9, SkillTag::Emotion),
    (12, SkillTag::Bias),
];

const MILESTONE_STEP: usize = 3;

#[derive(Debug, Clone)]
pub struct ProgressTracker {
    completed: BTreeSet<usize>,
    level_count: usize,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new(LEVEL_COUNT)
    }
}

impl ProgressTracker {
    pub fn new(level_count: usize) -> Self {
        Self {
            completed: BTreeSet::new(),
            level_count,
        }
    }

    /// El reto 1 siempre está abierto; el resto, si el anterior está completado.
    /// Un reto completado sigue jugable.
    pub fn is_unlocked(&self, level_id: usize) -> bool {
        if level_id == 0 || level_id > self.level_count {
            return false;
        }
        level_id == 1 || self.completed.contains(&(level_id - 1))
    }

    /// Idempotente. Devuelve `true` si el reto no estaba ya completado.
    pub fn mark_completed(&mut self, level_id: usize) -> bool {
        if level_id == 0 || level_id > self.level_count {
            warn!("ignoring completion of unknown level {level_id}");
            return false;
        }
        self.completed.insert(level_id)
    }

    pub fn is_completed(&self, level_id: usize) -> bool {
        self.completed.contains(&level_id)
    }

    pub fn completed_levels(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn completion_ratio(&self) -> f32 {
        if self.level_count == 0 {
            return 0.0;
        }
        self.completed.len() as f32 / self.level_count as f32
    }

    pub fn reset(&mut self) {
        self.completed.clear();
    }

    /// Cada tres retos (sin contar el final) toca un resumen de progreso
    pub fn milestone_reached(completed_count: usize) -> bool {
        completed_count > 0 && completed_count < LEVEL_COUNT && completed_count % MILESTONE_STEP == 0
    }

    pub fn unlocked_skills(completed_count: usize) -> BTreeSet<SkillTag> {
        SKILL_THRESHOLDS
            .iter()
            .filter(|(threshold, _)| completed_count >= *threshold)
            .map(|(_, skill)| *skill)
            .collect()
    }

    /// Habilidades que aparecen justo al llegar a `completed_count`
    pub fn skills_gained_at(completed_count: usize) -> Vec<SkillTag> {
        let before = completed_count
            .checked_sub(1)
            .map(Self::unlocked_skills)
            .unwrap_or_default();
        Self::unlocked_skills(completed_count)
            .difference(&before)
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlock_follows_previous_completion() {
        let mut tracker = ProgressTracker::default();
        tracker.mark_completed(1);
        tracker.mark_completed(4);
        for id in 1..=12 {
            let expected = id == 1 || tracker.is_completed(id - 1);
            assert_eq!(tracker.is_unlocked(id), expected, "level {id}");
        }
        assert!(tracker.is_unlocked(2));
        assert!(!tracker.is_unlocked(3));
        assert!(tracker.is_unlocked(5));
    }

    #[test]
    fn out_of_range_is_locked() {
        let mut tracker = ProgressTracker::default();
        for id in 1..=12 {
            tracker.mark_completed(id);
        }
        assert!(!tracker.is_unlocked(0));
        assert!(!tracker.is_unlocked(13));
        assert!(!tracker.mark_completed(13));
        assert_eq!(tracker.completed_count(), 12);
    }

    #[test]
    fn completed_level_stays_playable() {
        let mut tracker = ProgressTracker::default();
        tracker.mark_completed(1);
        tracker.mark_completed(2);
        assert!(tracker.is_unlocked(1));
        assert!(tracker.is_unlocked(2));
    }

    #[test]
    fn mark_completed_is_idempotent() {
        let mut tracker = ProgressTracker::default();
        assert!(tracker.mark_completed(3));
        let once = tracker.completed_levels().clone();
        assert!(!tracker.mark_completed(3));
        assert_eq!(tracker.completed_levels(), &once);
    }

    #[test]
    fn milestones_every_three_below_twelve() {
        let hits: Vec<usize> = (0..=13)
            .filter(|&n| ProgressTracker::milestone_reached(n))
            .collect();
        assert_eq!(hits, vec![3, 6, 9]);
    }

    #[test]
    fn skills_are_monotonic() {
        for n in 0..13 {
            let now = ProgressTracker::unlocked_skills(n);
            let next = ProgressTracker::unlocked_skills(n + 1);
            assert!(now.is_subset(&next), "skills({n}) not within skills({})", n + 1);
        }
        assert!(ProgressTracker::unlocked_skills(2).is_empty());
        assert_eq!(ProgressTracker::unlocked_skills(12).len(), 4);
    }

    #[test]
    fn skills_gained_only_at_thresholds() {
        assert_eq!(ProgressTracker::skills_gained_at(6), vec![SkillTag::Memory]);
        assert!(ProgressTracker::skills_gained_at(7).is_empty());
        assert!(ProgressTracker::skills_gained_at(0).is_empty());
    }

    #[test]
    fn ratio_and_reset() {
        let mut tracker = ProgressTracker::default();
        for id in 1..=3 {
            tracker.mark_completed(id);
        }
        assert!((tracker.completion_ratio() - 0.25).abs() < f32::EPSILON);
        tracker.reset();
        assert_eq!(tracker.completed_count(), 0);
        assert!(!tracker.is_unlocked(2));
    }
}
