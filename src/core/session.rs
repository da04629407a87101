use crate::bom::{BoardBom, BoardSummary, BomLine, Role};
use crate::catalog::Catalog;
use crate::core::services::{
    BomError, BomService, ProjectService, Recommendation, SelectionCriteria, SelectionError,
    SelectorService, ServiceResult,
};
use crate::project::ProjectBom;

/// Main amperages a switchboard can be built for.
pub const MAIN_AMPERAGES: [u32; 6] = [1200, 1600, 2000, 2500, 3000, 4000];
pub const DEFAULT_MAIN_AMPERAGE: u32 = 4000;

/// Facade over one working session: the catalog, the current selection, the
/// board being built, and the project it feeds.
///
/// Every read of board totals recomputes them from the ledger.
pub struct BomSession {
    catalog: Catalog,
    criteria: SelectionCriteria,
    pub main_amperage: u32,
    recommendation: Option<Recommendation>,
    board: BoardBom,
    project: ProjectBom,
}

impl BomSession {
    pub fn new(catalog: Catalog) -> Self {
        let board = BoardBom::from_catalog(&catalog);
        Self {
            catalog,
            criteria: SelectionCriteria::default(),
            main_amperage: DEFAULT_MAIN_AMPERAGE,
            recommendation: None,
            board,
            project: ProjectBom::new(),
        }
    }

    pub fn with_criteria(mut self, criteria: SelectionCriteria, main_amperage: u32) -> Self {
        self.criteria = criteria;
        self.main_amperage = main_amperage;
        self
    }

    pub fn criteria(&self) -> &SelectionCriteria {
        &self.criteria
    }

    /// Applies `change` to the criteria and drops the cached recommendation.
    pub fn update_criteria<R>(&mut self, change: impl FnOnce(&mut SelectionCriteria) -> R) -> R {
        self.recommendation = None;
        change(&mut self.criteria)
    }

    pub fn set_criteria(&mut self, criteria: SelectionCriteria) {
        self.update_criteria(|current| *current = criteria);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn board(&self) -> &BoardBom {
        &self.board
    }

    pub fn project(&self) -> &ProjectBom {
        &self.project
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    /// Runs the selector against the current criteria. A failed selection
    /// clears any previous recommendation.
    pub fn recommend(&mut self) -> Result<&Recommendation, SelectionError> {
        self.recommendation = None;
        let recommendation = SelectorService::select(&self.catalog, &self.criteria)?;
        Ok(&*self.recommendation.insert(recommendation))
    }

    /// Reselects against the current criteria and commits the primary
    /// candidate. A selection miss commits nothing.
    pub fn add_recommended(&mut self, qty: i64, role: Option<Role>) -> ServiceResult<&BomLine> {
        let item = self.recommend()?.primary().item.clone();
        Ok(BomService::commit_breaker(&mut self.board, &item, role, qty)?)
    }

    pub fn add_breaker(&mut self, item: &str, qty: i64, role: Option<Role>) -> ServiceResult<&BomLine> {
        Ok(BomService::commit_breaker(&mut self.board, item, role, qty)?)
    }

    pub fn reset_board(&mut self) {
        BomService::reset_board(&mut self.board);
    }

    pub fn board_summary(&self) -> Result<BoardSummary, BomError> {
        BomService::summarize(&self.board, &self.catalog, self.main_amperage)
    }

    /// Appends the current board to the project under `name`.
    pub fn commit_board(&mut self, name: &str) -> ServiceResult<usize> {
        let summary = self.board_summary()?;
        Ok(ProjectService::commit_board(
            &mut self.project,
            name,
            &summary.breakers,
            &summary.straps,
            &summary.interiors(),
        )?)
    }

    pub fn remove_board(&mut self, name: &str) -> ServiceResult<usize> {
        Ok(ProjectService::remove_board(&mut self.project, name)?)
    }

    pub fn reset_project(&mut self) {
        ProjectService::reset_project(&mut self.project);
    }

    pub fn export_csv(&self) -> ServiceResult<Vec<u8>> {
        Ok(ProjectService::export_csv(&self.project)?)
    }
}
