use super::*;
use pretty_assertions::assert_eq;

fn round_trip(state: ScannerState) -> ScannerState {
    let mut buffer = [0u8; 16];
    let len = state.serialize(&mut buffer);
    assert!(len <= ScannerState::MAX_SERIALIZED_LEN);
    ScannerState::restore(&buffer[..len])
}

// === Serialization ===

#[test]
fn default_state_serializes_to_nothing() {
    let mut buffer = [0xAAu8; 4];
    assert_eq!(ScannerState::default().serialize(&mut buffer), 0);
    assert_eq!(buffer, [0xAA; 4]);
}

#[test]
fn newline_state_serializes_to_one_byte() {
    let mut buffer = [0u8; 4];
    let state = ScannerState {
        newline_before: true,
    };
    assert_eq!(state.serialize(&mut buffer), 1);
    assert_eq!(buffer[0], 1);
}

#[test]
fn empty_buffer_cannot_hold_state() {
    let state = ScannerState {
        newline_before: true,
    };
    assert_eq!(state.serialize(&mut []), 0);
}

#[test]
fn round_trips_both_values() {
    for newline_before in [false, true] {
        let state = ScannerState { newline_before };
        assert_eq!(round_trip(state), state);
    }
}

// === Deserialization ===

#[test]
fn empty_bytes_restore_default() {
    assert_eq!(ScannerState::from_bytes(&[]), Ok(ScannerState::default()));
    assert!(!ScannerState::restore(&[]).newline_before);
}

#[test]
fn strict_decode_accepts_flags() {
    assert_eq!(
        ScannerState::from_bytes(&[0]),
        Ok(ScannerState {
            newline_before: false
        })
    );
    assert_eq!(
        ScannerState::from_bytes(&[1]),
        Ok(ScannerState {
            newline_before: true
        })
    );
}

#[test]
fn strict_decode_rejects_bad_flag() {
    assert_eq!(
        ScannerState::from_bytes(&[7]),
        Err(StateError::InvalidFlag(7))
    );
}

#[test]
fn strict_decode_rejects_long_buffers() {
    assert_eq!(
        ScannerState::from_bytes(&[1, 0]),
        Err(StateError::TooLong { len: 2 })
    );
}

#[test]
fn lenient_restore_falls_back_to_default() {
    assert_eq!(ScannerState::restore(&[7]), ScannerState::default());
    assert_eq!(ScannerState::restore(&[1, 1, 1]), ScannerState::default());
}

#[test]
fn error_messages() {
    assert_eq!(
        StateError::TooLong { len: 3 }.to_string(),
        "serialized scanner state is 3 bytes, expected at most 1"
    );
    assert_eq!(
        StateError::InvalidFlag(7).to_string(),
        "serialized newline flag must be 0 or 1, found 0x07"
    );
}
