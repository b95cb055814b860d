pub mod generic;
pub mod numeric;
pub mod string;

pub use generic::{NullCheck, UnicityCheck};
pub use numeric::NegativeCheck;
pub use string::{ConstantCheck, MembershipCheck};
