// src/data.rs

use crate::error::CatalogError;
use crate::model::{LevelDefinition, Mode};
use log::debug;

pub const LEVEL_COUNT: usize = 12;

/// Tabla inmutable de retos, indexada por id (1-based)
#[derive(Debug, Clone)]
pub struct LevelCatalog {
    levels: Vec<LevelDefinition>,
}

impl LevelCatalog {
    /// Carga la tabla de retos desde el YAML embebido
    pub fn embedded() -> Result<Self, CatalogError> {
        let file_content = include_str!("data/levels.yaml");
        Self::from_yaml(file_content)
    }

    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let levels: Vec<LevelDefinition> = serde_yaml::from_str(source)?;
        Self::from_levels(levels)
    }

    pub fn from_levels(levels: Vec<LevelDefinition>) -> Result<Self, CatalogError> {
        if levels.len() != LEVEL_COUNT {
            return Err(CatalogError::WrongLevelCount {
                expected: LEVEL_COUNT,
                found: levels.len(),
            });
        }

        for (position, level) in levels.iter().enumerate() {
            if level.id != position + 1 {
                return Err(CatalogError::NotDense {
                    position,
                    found: level.id,
                });
            }
            match level.mode {
                Mode::Blind => {
                    if !level.view_time.is_some_and(|t| t > 0) {
                        return Err(CatalogError::MissingViewTime(level.id));
                    }
                    if level.bias_type.is_some() {
                        return Err(CatalogError::StrayParameter(level.id));
                    }
                }
                Mode::Bias => {
                    if level.bias_type.is_none() {
                        return Err(CatalogError::MissingBiasType(level.id));
                    }
                    if level.view_time.is_some() {
                        return Err(CatalogError::StrayParameter(level.id));
                    }
                }
                Mode::Core | Mode::Emotion => {
                    if level.view_time.is_some() || level.bias_type.is_some() {
                        return Err(CatalogError::StrayParameter(level.id));
                    }
                }
            }
        }

        debug!("level catalog loaded with {} levels", levels.len());
        Ok(Self { levels })
    }

    pub fn get(&self, id: usize) -> Option<&LevelDefinition> {
        id.checked_sub(1).and_then(|idx| self.levels.get(idx))
    }

    pub fn levels(&self) -> &[LevelDefinition] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn last_id(&self) -> usize {
        self.levels.len()
    }

    /// Primer reto de un bloque de modo (el anterior tiene otro modo)
    pub fn is_first_of_mode(&self, id: usize) -> bool {
        match (self.get(id), id.checked_sub(1).and_then(|prev| self.get(prev))) {
            (Some(level), Some(prev)) => level.mode != prev.mode,
            (Some(_), None) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BiasType;

    #[test]
    fn embedded_catalog_follows_mode_partition() {
        let catalog = LevelCatalog::embedded().unwrap();
        assert_eq!(catalog.len(), 12);
        for level in catalog.levels() {
            let expected = match level.id {
                1..=3 => Mode::Core,
                4..=6 => Mode::Blind,
                7..=9 => Mode::Emotion,
                _ => Mode::Bias,
            };
            assert_eq!(level.mode, expected, "level {}", level.id);
        }
        assert_eq!(catalog.get(4).unwrap().view_time, Some(10));
        assert_eq!(catalog.get(6).unwrap().view_time, Some(6));
        assert_eq!(catalog.get(10).unwrap().bias_type, Some(BiasType::Gender));
        assert_eq!(catalog.get(12).unwrap().bias_type, Some(BiasType::Stereotype));
    }

    #[test]
    fn get_is_none_outside_range() {
        let catalog = LevelCatalog::embedded().unwrap();
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(13).is_none());
        assert_eq!(catalog.get(1).unwrap().title, "Mountain Sunset");
    }

    #[test]
    fn first_of_mode_marks_group_starts() {
        let catalog = LevelCatalog::embedded().unwrap();
        let firsts: Vec<usize> = (1..=12).filter(|&id| catalog.is_first_of_mode(id)).collect();
        assert_eq!(firsts, vec![1, 4, 7, 10]);
    }

    #[test]
    fn rejects_gaps_and_missing_parameters() {
        let mut levels = LevelCatalog::embedded().unwrap().levels().to_vec();
        levels[4].view_time = None;
        assert!(matches!(
            LevelCatalog::from_levels(levels.clone()),
            Err(CatalogError::MissingViewTime(5))
        ));

        levels[4].view_time = Some(8);
        levels[2].id = 9;
        assert!(matches!(
            LevelCatalog::from_levels(levels.clone()),
            Err(CatalogError::NotDense { position: 2, found: 9 })
        ));

        levels.truncate(11);
        assert!(matches!(
            LevelCatalog::from_levels(levels),
            Err(CatalogError::WrongLevelCount { found: 11, .. })
        ));
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(matches!(
            LevelCatalog::from_yaml("- id: one"),
            Err(CatalogError::Parse(_))
        ));
    }
}
