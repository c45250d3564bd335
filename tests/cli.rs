use assert_cmd::Command;
use predicates::prelude::*;

const SPEEDS: &str = r#"[
  {
    "type": "Constant",
    "name": "VehicleSpeed_IV",
    "value": {"type": "IntegerValue", "name": "VehicleSpeed_IV", "typeRef": "/DataTypes/uint16", "value": 65535}
  },
  {
    "type": "Constant",
    "name": "Limits_IV",
    "value": {
      "type": "RecordValue",
      "name": "Limits",
      "typeRef": "Limits_T",
      "elements": [
        {"type": "IntegerValue", "name": "min", "value": 0},
        {"type": "IntegerValue", "name": "max", "value": 100}
      ]
    }
  }
]"#;

const FLAG: &str = r#"{
  "type": "Constant",
  "name": "Flag_IV",
  "value": {"type": "BooleanValue", "name": "Flag", "value": true}
}"#;

fn arconst() -> Command {
    Command::cargo_bin("arconst").unwrap()
}

#[test]
fn init_prints_initializers() {
    arconst()
        .args(["init", "-"])
        .write_stdin(SPEEDS)
        .assert()
        .success()
        .stdout("VehicleSpeed_IV 65535\nLimits_IV {0, 100}\n");
}

#[test]
fn init_fails_on_unsupported_value() {
    arconst()
        .args(["init", "-"])
        .write_stdin(FLAG)
        .assert()
        .failure()
        .stderr(predicate::str::contains("BooleanValue"));
}

#[test]
fn tags_follow_schema_version() {
    arconst()
        .args(["tags", "-", "--schema", "3.0.2"])
        .write_stdin(SPEEDS)
        .assert()
        .success()
        .stdout(predicate::str::contains("  RECORD-SPECIFICATION\n    INTEGER-LITERAL"));

    arconst()
        .args(["tags", "-", "--schema", "4.0"])
        .write_stdin(SPEEDS)
        .assert()
        .success()
        .stdout(predicate::str::contains("  RECORD-VALUE-SPECIFICATION"));
}

#[test]
fn generate_const_definitions() {
    arconst()
        .args(["generate", "-", "--no-comments"])
        .write_stdin(SPEEDS)
        .assert()
        .success()
        .stdout("const uint16 VehicleSpeed_IV = 65535;\nconst Limits_T Limits_IV = {0, 100};\n");
}

#[test]
fn generate_define_macros() {
    arconst()
        .args(["generate", "-", "--style", "define", "--prefix", "C_", "--no-comments"])
        .write_stdin(SPEEDS)
        .assert()
        .success()
        .stdout(predicate::str::contains("#define C_VEHICLE_SPEED_IV 65535"));
}

#[test]
fn dump_prints_dictionaries() {
    arconst()
        .args(["dump", "-"])
        .write_stdin(FLAG)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"BooleanValue\""));
}

#[test]
fn rejects_bad_schema_version() {
    arconst()
        .args(["tags", "-", "--schema", "abc"])
        .write_stdin(SPEEDS)
        .assert()
        .failure();
}

#[test]
fn rust_log_enables_debug_events() {
    arconst()
        .env("RUST_LOG", "debug")
        .args(["init", "-"])
        .write_stdin(SPEEDS)
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded input"));

    arconst()
        .env_remove("RUST_LOG")
        .args(["init", "-"])
        .write_stdin(SPEEDS)
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded input").not());
}

#[test]
fn init_coerces_stored_integer_text() {
    arconst()
        .args(["init", "-"])
        .write_stdin(
            r#"{"type": "Constant", "name": "C", "value": {"type": "IntegerValue", "name": "V", "value": "42"}}"#,
        )
        .assert()
        .success()
        .stdout("C 42\n");
}
