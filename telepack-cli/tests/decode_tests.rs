use std::fs;
use tempfile::tempdir;

use telepack_cli::commands::decode;
use telepack_core::mirror::decode_record;

const STATE_FRAME: [u8; 8] = [178, 157, 26, 78, 167, 88, 234, 94];

#[test]
fn decode_file_to_json_lines() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.tpk");
    let out_path = td.path().join("out.jsonl");

    let mut data = STATE_FRAME.to_vec();
    data.extend_from_slice(&STATE_FRAME);
    fs::write(&in_path, &data).unwrap();

    decode::execute(
        Some(in_path.to_str().unwrap()),
        None,
        Some(out_path.to_str().unwrap()),
    )
    .unwrap();

    let text = fs::read_to_string(&out_path).unwrap();
    let records: Vec<_> = text.lines().map(|l| decode_record(l).unwrap()).collect();
    assert_eq!(records.len(), 2);
    for record in records {
        assert_eq!(record.packet_type, "State");
        assert_eq!(record.id, 54);
        assert_eq!(record.data, [-724.875, 846.5, 442.5625]);
    }
}

#[test]
fn decode_hex_argument() {
    let td = tempdir().unwrap();
    let out_path = td.path().join("out.jsonl");

    decode::execute(None, Some("b29d1a4ea758ea5e"), Some(out_path.to_str().unwrap())).unwrap();

    let text = fs::read_to_string(&out_path).unwrap();
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn decode_requires_one_source() {
    assert!(decode::execute(None, None, None).is_err());
    assert!(decode::execute(Some("a"), Some("b29d"), None).is_err());
}

#[test]
fn decode_rejects_bad_hex() {
    assert!(decode::execute(None, Some("zz"), None).is_err());
}

#[test]
fn decode_lines_with_fixed_time() {
    let lines = decode::decode_to_json_lines(&STATE_FRAME, 1000).unwrap();
    assert_eq!(
        lines,
        vec![r#"{"time":1000,"type":"State","id":54,"data":[-724.875,846.5,442.5625]}"#]
    );
}

#[test]
fn decode_partial_tail_is_zero_filled() {
    let mut data = STATE_FRAME.to_vec();
    data.push(STATE_FRAME[0]);

    let lines = decode::decode_to_json_lines(&data, 0).unwrap();
    assert_eq!(lines.len(), 2);

    let tail = decode_record(&lines[1]).unwrap();
    assert_eq!(tail.packet_type, "State");
    assert_eq!(tail.id, 22);
}
