//! Collaborator contract for the endpoint pairs the command codes talk
//! about: whatever one endpoint writes must read back byte-identical
//! from its twin, in both directions. The transport itself belongs to
//! the OS; only the contract is pinned here.

#![cfg(unix)]

use std::io::{Read, Write};
use std::os::unix::net::UnixStream;

fn assert_echoes(tx: &mut UnixStream, rx: &mut UnixStream, payload: &[u8]) {
    tx.write_all(payload).unwrap();
    tx.flush().unwrap();

    let mut received = vec![0u8; payload.len()];
    rx.read_exact(&mut received).unwrap();
    assert_eq!(received, payload);
}

#[test]
fn endpoint_pair_echoes_every_byte_value_both_ways() {
    let all_bytes: Vec<u8> = (0u8..=255).collect();

    let (mut left, mut right) = UnixStream::pair().unwrap();
    assert_echoes(&mut left, &mut right, &all_bytes);
    assert_echoes(&mut right, &mut left, &all_bytes);
}

#[test]
fn bulk_transfer_survives_the_roundtrip() {
    let payload: Vec<u8> = (0..8 * 1024).map(|i| (i % 251) as u8).collect();

    let (mut left, mut right) = UnixStream::pair().unwrap();
    assert_echoes(&mut left, &mut right, &payload);
    assert_echoes(&mut right, &mut left, &payload);
}
