mod sqid;

pub use sqid::{decode_handler, encode_handler};
