mod sqid;

pub use sqid::{validate_id_charset, validate_numbers};
