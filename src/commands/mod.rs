pub mod details;
pub mod execution_helper;
pub mod jump;
pub mod list;
pub mod login;
pub mod tunnel;

pub use details::DetailsCommand;
pub use jump::JumpCommand;
pub use list::ListCommand;
pub use login::LoginCommand;
pub use tunnel::TunnelCommand;
