use super::*;

impl MirrorApp {
    /// Rejilla de retos, recalculada desde el progreso cada vez
    pub fn level_cards(&self) -> Vec<LevelCard> {
        self.catalog
            .levels()
            .iter()
            .map(|level| LevelCard {
                id: level.id,
                title: level.title.clone(),
                icon: level.icon.clone(),
                mode: level.mode,
                unlocked: self.progress.is_unlocked(level.id),
                completed: self.progress.is_completed(level.id),
            })
            .collect()
    }

    pub fn skill_badges(&self) -> Vec<SkillBadge> {
        let unlocked = ProgressTracker::unlocked_skills(self.progress.completed_count());
        SkillTag::ALL
            .iter()
            .map(|&skill| SkillBadge {
                skill,
                unlocked: unlocked.contains(&skill),
            })
            .collect()
    }

    pub fn progress_label(&self) -> String {
        format!(
            "{}/{} challenges completed",
            self.progress.completed_count(),
            self.catalog.len()
        )
    }
}
