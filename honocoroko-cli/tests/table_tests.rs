use std::fs;
use tempfile::tempdir;

use honocoroko_cli::{commands::table, CategoryArg, DirectionArg};
use honocoroko_core::{Direction, MappingCategory};
use serde_json::Value;

#[test]
fn table_json_all_categories() {
    let td = tempdir().unwrap();
    let out_path = td.path().join("table.json");

    table::execute(None, Some(out_path.to_str().unwrap())).unwrap();

    let rows: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    let rows = rows.as_array().unwrap();
    let expected: usize = MappingCategory::all().iter().map(|c| c.table().len()).sum();
    assert_eq!(rows.len(), expected);
}

#[test]
fn table_json_single_category() {
    let td = tempdir().unwrap();
    let out_path = td.path().join("numbers.json");

    table::execute(
        Some(CategoryArg::Numbers.into()),
        Some(out_path.to_str().unwrap()),
    )
    .unwrap();

    let rows: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[1]["latin"], "1");
    assert_eq!(rows[1]["javanese"], "꧑");
    assert_eq!(rows[1]["codepoints"], "U+A9D1");
    assert_eq!(rows[1]["decodes_to"], "1");
    assert_eq!(rows[1]["category"], "numbers");
}

#[test]
fn table_json_murda_not_decodable() {
    let td = tempdir().unwrap();
    let out_path = td.path().join("murda.json");

    table::execute(
        Some(CategoryArg::Murda.into()),
        Some(out_path.to_str().unwrap()),
    )
    .unwrap();

    let rows: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    for row in rows.as_array().unwrap() {
        assert!(row["decodes_to"].is_null());
    }
}

#[test]
fn table_prints_to_stdout() {
    table::execute(Some(MappingCategory::VowelMarks), None).unwrap();
}

#[test]
fn direction_arg_maps_to_core() {
    assert_eq!(Direction::from(DirectionArg::To), Direction::ToHonocoroko);
    assert_eq!(Direction::from(DirectionArg::From), Direction::FromHonocoroko);
}
