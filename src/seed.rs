//! Optional startup data
//!
//! A fresh store is empty; anything else is opt-in. [`SeedData`] describes
//! folders and tasks to create through the normal mutation path, and
//! [`sample_seed`] reproduces the dataset the app ships with for first
//! launch and previews.

use crate::palette::{ColorHex, default_palette};
use serde::{Deserialize, Serialize};

/// Folders and tasks to create when a store is initialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    pub folders: Vec<FolderSeed>,
    pub tasks: Vec<TaskSeed>,
}

/// One folder to create at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderSeed {
    pub name: String,
    pub color: ColorHex,
}

/// One task to create at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSeed {
    pub title: String,
    /// Index into [`SeedData::folders`] of the owning folder. Seeds
    /// pointing past the end of that list are skipped.
    pub folder: usize,
}

/// The first-launch dataset: four folders, six sample tasks.
pub fn sample_seed() -> SeedData {
    let palette = default_palette();
    SeedData {
        folders: vec![
            FolderSeed {
                name: "Health".to_string(),
                color: palette[0].clone(),
            },
            FolderSeed {
                name: "Work".to_string(),
                color: palette[1].clone(),
            },
            FolderSeed {
                name: "Mental Health".to_string(),
                color: palette[2].clone(),
            },
            FolderSeed {
                name: "Others".to_string(),
                color: palette[5].clone(),
            },
        ],
        tasks: vec![
            TaskSeed {
                title: "Drink 8 glasses of water".to_string(),
                folder: 0,
            },
            TaskSeed {
                title: "Edit the PDF".to_string(),
                folder: 1,
            },
            TaskSeed {
                title: "Write in a gratitude journal".to_string(),
                folder: 2,
            },
            TaskSeed {
                title: "Get a notebook".to_string(),
                folder: 3,
            },
            TaskSeed {
                title: "Follow the youtube tutorial".to_string(),
                folder: 3,
            },
            TaskSeed {
                title: "Stretch everyday for 15 mins".to_string(),
                folder: 0,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_seed_shape() {
        let seed = sample_seed();
        assert_eq!(seed.folders.len(), 4);
        assert_eq!(seed.tasks.len(), 6);

        // Every task seed points at a real folder seed
        assert!(seed.tasks.iter().all(|t| t.folder < seed.folders.len()));
    }

    #[test]
    fn test_sample_seed_folder_names() {
        let seed = sample_seed();
        let names: Vec<&str> = seed.folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Health", "Work", "Mental Health", "Others"]);
    }

    #[test]
    fn test_seed_loads_from_toml() {
        let toml_str = r##"
    [[folders]]
    name = "Health"
    color = "#8B7FD4"

    [[folders]]
    name = "Work"
    color = "#7FD4A1"

    [[tasks]]
    title = "Drink 8 glasses of water"
    folder = 0

    [[tasks]]
    title = "Edit the PDF"
    folder = 1
    "##;

        let seed: SeedData = toml::from_str(toml_str).unwrap();
        assert_eq!(seed.folders.len(), 2);
        assert_eq!(seed.folders[0].color.as_str(), "#8B7FD4");
        assert_eq!(seed.tasks[1].folder, 1);

        let round_tripped: SeedData = toml::from_str(&toml::to_string(&seed).unwrap()).unwrap();
        assert_eq!(round_tripped.folders.len(), seed.folders.len());
        assert_eq!(round_tripped.tasks.len(), seed.tasks.len());
    }
}
