use thiserror::Error;

use crate::bom::{BomLine, InteriorLine, StrapLine};
use crate::project::{self, ProductCategory, ProjectBom, ProjectLine};

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Board BOM not added. Please provide a switchboard name.")]
    EmptyBoardName,
    #[error("Board `{0}` already exists. Choose another name or remove that board first.")]
    DuplicateBoardName(String),
    #[error("No board named `{0}` in the project")]
    BoardNotFound(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub struct ProjectService;

impl ProjectService {
    /// Appends one line per non-zero board line; returns how many were added.
    /// Rejected commits leave the project untouched.
    pub fn commit_board(
        project: &mut ProjectBom,
        name: &str,
        breakers: &[BomLine],
        straps: &[StrapLine],
        interiors: &[InteriorLine],
    ) -> Result<usize, ProjectError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProjectError::EmptyBoardName);
        }
        if project.contains_board(name) {
            tracing::warn!(board = name, "duplicate board name rejected");
            return Err(ProjectError::DuplicateBoardName(name.to_string()));
        }

        let line = |product, quantity: i64, item: &str, part_number: &str| ProjectLine {
            board: name.to_string(),
            product,
            quantity,
            item: item.to_string(),
            part_number: part_number.to_string(),
        };

        let mut lines = Vec::new();
        lines.extend(
            breakers
                .iter()
                .filter(|breaker| breaker.is_listed() && breaker.total() != 0)
                .map(|breaker| {
                    line(
                        ProductCategory::Breaker,
                        breaker.total(),
                        &breaker.item,
                        &breaker.part_number,
                    )
                }),
        );
        lines.extend(straps.iter().filter(|strap| strap.quantity > 0).filter_map(|strap| {
            strap.strap.as_ref().map(|record| {
                line(
                    ProductCategory::Strap,
                    i64::from(strap.quantity),
                    &record.item,
                    &record.part_number,
                )
            })
        }));
        lines.extend(
            interiors
                .iter()
                .filter(|interior| interior.is_listed())
                .map(|interior| {
                    line(
                        ProductCategory::Interior,
                        i64::from(interior.quantity),
                        &interior.interior.item,
                        &interior.interior.part_number,
                    )
                }),
        );

        let added = lines.len();
        project.append_board(name.to_string(), lines);
        tracing::info!(board = name, lines = added, "board committed to project");
        Ok(added)
    }

    pub fn remove_board(project: &mut ProjectBom, name: &str) -> Result<usize, ProjectError> {
        let name = name.trim();
        let removed = project
            .remove_board(name)
            .ok_or_else(|| ProjectError::BoardNotFound(name.to_string()))?;
        tracing::info!(board = name, lines = removed, "board removed from project");
        Ok(removed)
    }

    pub fn reset_project(project: &mut ProjectBom) {
        project.clear();
        tracing::info!("project BOM reset");
    }

    pub fn export_csv(project: &ProjectBom) -> Result<Vec<u8>, ProjectError> {
        Ok(project::to_csv(project.lines())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InteriorRecord, StrapRecord};

    fn breaker_line(item: &str, main: i64, branch: i64) -> BomLine {
        BomLine {
            item: item.into(),
            part_number: format!("PN-{item}"),
            frame_rating: 250,
            main_qty: main,
            branch_qty: branch,
        }
    }

    fn board_lines() -> (Vec<BomLine>, Vec<StrapLine>, Vec<InteriorLine>) {
        let breakers = vec![breaker_line("B1", 1, 0), breaker_line("B2", 0, 4)];
        let straps = vec![StrapLine {
            frame_rating: 250,
            quantity: 2,
            strap: Some(StrapRecord {
                frame_rating: 250,
                item: "S250".into(),
                part_number: "PN-S250".into(),
            }),
        }];
        let interiors = vec![InteriorLine {
            interior: InteriorRecord {
                amperage: 4000,
                item: "I4000".into(),
                part_number: "PN-I4000".into(),
                x_spaces: 12,
            },
            quantity: 1,
        }];
        (breakers, straps, interiors)
    }

    #[test]
    fn commit_tags_every_category() {
        let mut project = ProjectBom::new();
        let (breakers, straps, interiors) = board_lines();
        let added =
            ProjectService::commit_board(&mut project, " MSB-1 ", &breakers, &straps, &interiors)
                .unwrap();
        assert_eq!(added, 4);
        assert_eq!(project.boards(), ["MSB-1"]);
        let products: Vec<_> = project.lines().iter().map(|l| l.product).collect();
        assert_eq!(
            products,
            [
                ProductCategory::Breaker,
                ProductCategory::Breaker,
                ProductCategory::Strap,
                ProductCategory::Interior
            ]
        );
        assert_eq!(project.lines()[1].quantity, 4);
    }

    #[test]
    fn breaker_quantity_combines_main_and_branch() {
        let mut project = ProjectBom::new();
        let breakers = vec![breaker_line("B1", 2, 3), breaker_line("B2", 1, -1)];
        ProjectService::commit_board(&mut project, "P", &breakers, &[], &[]).unwrap();
        assert_eq!(project.lines().len(), 1);
        assert_eq!(project.lines()[0].quantity, 5);
    }

    #[test]
    fn empty_or_duplicate_names_are_rejected() {
        let mut project = ProjectBom::new();
        let (breakers, straps, interiors) = board_lines();
        assert!(matches!(
            ProjectService::commit_board(&mut project, "  ", &breakers, &straps, &interiors),
            Err(ProjectError::EmptyBoardName)
        ));
        ProjectService::commit_board(&mut project, "A", &breakers, &straps, &interiors).unwrap();
        let snapshot = project.clone();
        assert!(matches!(
            ProjectService::commit_board(&mut project, "A", &breakers, &straps, &interiors),
            Err(ProjectError::DuplicateBoardName(name)) if name == "A"
        ));
        assert_eq!(project, snapshot);
    }

    #[test]
    fn remove_and_reset() {
        let mut project = ProjectBom::new();
        let (breakers, straps, interiors) = board_lines();
        ProjectService::commit_board(&mut project, "A", &breakers, &straps, &interiors).unwrap();
        ProjectService::commit_board(&mut project, "B", &breakers, &[], &[]).unwrap();

        assert_eq!(ProjectService::remove_board(&mut project, "A").unwrap(), 4);
        assert_eq!(project.boards(), ["B"]);
        assert!(project.lines().iter().all(|line| line.board == "B"));
        assert!(matches!(
            ProjectService::remove_board(&mut project, "A"),
            Err(ProjectError::BoardNotFound(_))
        ));

        ProjectService::reset_project(&mut project);
        assert!(project.is_empty());
        ProjectService::commit_board(&mut project, "B", &breakers, &[], &[]).unwrap();
    }

    #[test]
    fn remove_matches_the_trimmed_name() {
        let mut project = ProjectBom::new();
        let (breakers, _, _) = board_lines();
        ProjectService::commit_board(&mut project, " A ", &breakers, &[], &[]).unwrap();
        assert_eq!(project.boards(), ["A"]);

        assert!(ProjectService::remove_board(&mut project, " A ").is_ok());
        assert!(project.is_empty());
        assert!(project.boards().is_empty());
    }
}
