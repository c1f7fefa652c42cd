pub mod appointment;
pub mod billing;
pub mod department;
pub mod doctor;
pub mod enums;
pub mod patient;
pub mod service;

pub use appointment::*;
pub use billing::*;
pub use department::*;
pub use doctor::*;
pub use enums::*;
pub use patient::*;
pub use service::*;
