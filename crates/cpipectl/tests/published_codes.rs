//! The registry constants are a cross-process contract: the driver was
//! shipped against these exact values, so they are asserted here as
//! literals rather than re-derived through the codec.

use cpipectl::cpipe;
use cpipectl::ioc::{decode, encode_none, encode_read, Direction};

#[test]
fn published_literals_hold() {
    assert_eq!(cpipe::GET_AVAILABLE_READ, 2_147_774_464);
    assert_eq!(cpipe::GET_AVAILABLE_WRITE, 2_147_774_465);
    assert_eq!(cpipe::MAX_NR, 1);
}

#[test]
fn registry_codes_decode_as_reads_of_an_i32() {
    for (nr, cmd) in cpipe::COMMANDS.iter().enumerate() {
        let fields = decode(cmd.code);
        assert_eq!(fields.dir, Direction::Read);
        assert_eq!(fields.magic, cpipe::MAGIC);
        assert_eq!(fields.nr as usize, nr);
        assert_eq!(fields.size, std::mem::size_of::<i32>());
    }
}

#[test]
fn registry_codes_rebuild_through_the_checked_encoder() {
    assert_eq!(
        encode_read(cpipe::MAGIC, 0, 4).unwrap(),
        cpipe::GET_AVAILABLE_READ
    );
    assert_eq!(
        encode_read(cpipe::MAGIC, 1, 4).unwrap(),
        cpipe::GET_AVAILABLE_WRITE
    );
}

#[test]
fn dispatcher_admits_only_cpipe_codes_in_number_range() {
    assert!(cpipe::accepts(cpipe::GET_AVAILABLE_READ));
    assert!(cpipe::accepts(cpipe::GET_AVAILABLE_WRITE));

    assert!(!cpipe::accepts(encode_none(b'q', 0)));
    assert!(!cpipe::accepts(encode_none(cpipe::MAGIC, cpipe::MAX_NR + 1)));
}
