pub mod error;
pub mod model;
pub mod resolver;
pub mod validation;

pub use error::{CoreError, Result};
pub use model::store::{BayStore, BayStoreError};
pub use resolver::context::{ResolutionRequest, UserDirectory, UNKNOWN_USER};
pub use resolver::engine::{
    resolve_board, resolve_board_from_store, resolve_schedule, resolve_schedule_from_store,
    BoardResolution, ReservationType, ResolvedBay, ResolvedStatus, ScheduleResolution, ScheduleRow,
};
