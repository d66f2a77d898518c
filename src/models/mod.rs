mod sqid;

pub use sqid::{DecodeRequestDto, EncodeRequestDto, SqidResponseDto};
