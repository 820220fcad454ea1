//! Внешнее представление рук:
//! - DTO (dto.rs): структуры для JSON-вывода;
//! - отчёты (reports.rs): сборка DTO и текстовый вид.

pub mod dto;
pub mod reports;

pub use dto::*;
pub use reports::*;
