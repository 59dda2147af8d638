/// All logic related to account balance management: the [`account::Account`]
/// type, its validated deposit/withdraw/transfer operations, and the errors
/// those operations can surface.
pub mod account;

pub use account::{Account, AccountError};
