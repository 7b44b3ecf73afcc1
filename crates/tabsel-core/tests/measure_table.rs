//! Integration tests for the delimited measurement-table reader and writer.

use std::io::Cursor;

use tabsel_core::io::{
    read_measure_table_from_reader, read_measure_table_with_config, read_measure_tsv,
    write_measure_table, TableReaderConfig,
};
use tabsel_core::TabselError;

const PATIENTS: &str = "idPatient\ttimeDiagnosis\ttimeCollection\tmeasure\n\
P01\t0\t3\t1.6\n\
P02\t2\t5\t3.9\n\
P03\t1\t4\t4.2\n\
P04\t7\t9\t8.0\n";

fn patients() -> tabsel_core::io::MeasureTable {
    read_measure_table_from_reader(Cursor::new(PATIENTS), &TableReaderConfig::default()).unwrap()
}

#[test]
fn reads_default_patient_layout() {
    let table = patients();
    assert_eq!(table.ids, vec!["P01", "P02", "P03", "P04"]);
    assert_eq!(
        table.column_names,
        vec!["timeDiagnosis", "timeCollection", "measure"]
    );
    assert_eq!(table.values.shape(), (4, 3));
    assert_eq!(table.values[(3, 2)], 8.0);
}

#[test]
fn reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patients.tsv");
    std::fs::write(&path, PATIENTS).unwrap();
    let table = read_measure_tsv(&path).unwrap();
    assert_eq!(table.nrows(), 4);
}

#[test]
fn missing_file_errors_with_path() {
    let err = read_measure_tsv("/nonexistent/patients.tsv").unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/patients.tsv"));
}

#[test]
fn csv_with_all_value_columns() {
    let data = "id,a,b\nx,1,2\ny,3,4\n";
    let config = TableReaderConfig {
        delimiter: ',',
        id_column: "id".to_string(),
        value_columns: None,
    };
    let table = read_measure_table_from_reader(Cursor::new(data), &config).unwrap();
    assert_eq!(table.column_names, vec!["a", "b"]);
    assert_eq!(table.values.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
}

#[test]
fn missing_value_column_errors() {
    let data = "idPatient\tmeasure\nP01\t1.0\n";
    let err =
        read_measure_table_from_reader(Cursor::new(data), &TableReaderConfig::default())
            .unwrap_err();
    assert!(err.to_string().contains("timeDiagnosis"));
}

#[test]
fn non_numeric_cell_is_type_mismatch() {
    let data = "idPatient\ttimeDiagnosis\ttimeCollection\tmeasure\nP01\t0\t3\thigh\n";
    let err =
        read_measure_table_from_reader(Cursor::new(data), &TableReaderConfig::default())
            .unwrap_err();
    assert!(err.to_string().contains("measure"));
    let root = err.downcast_ref::<TabselError>().unwrap();
    assert!(matches!(root, TabselError::TypeMismatch { found, .. } if found == "high"));
}

#[test]
fn short_row_errors() {
    let data = "idPatient\ttimeDiagnosis\ttimeCollection\tmeasure\nP01\t0\t3\n";
    assert!(
        read_measure_table_from_reader(Cursor::new(data), &TableReaderConfig::default()).is_err()
    );
}

#[test]
fn subset_carries_labels() {
    let table = patients();
    let cols = table.resolve_columns(&["measure", "timeDiagnosis"]).unwrap();
    let sub = table.subset(&[3, 0, 0], &cols).unwrap();
    assert_eq!(sub.ids, vec!["P04", "P01", "P01"]);
    assert_eq!(sub.column_names, vec!["measure", "timeDiagnosis"]);
    assert_eq!(
        sub.values.to_rows(),
        vec![vec![8.0, 7.0], vec![1.6, 0.0], vec![1.6, 0.0]]
    );
}

#[test]
fn subset_out_of_bounds() {
    let table = patients();
    assert!(matches!(
        table.subset(&[4], &[0]),
        Err(TabselError::OutOfBounds { index: 4, len: 4, .. })
    ));
}

#[test]
fn unknown_column_name() {
    let table = patients();
    assert_eq!(
        table.resolve_columns(&["weight"]),
        Err(TabselError::UnknownColumn("weight".to_string()))
    );
    assert!(table.column("weight").is_err());
}

#[test]
fn scale_column_only_touches_one_column() {
    let table = patients();
    let scaled = table.scale_column("measure", 3.0).unwrap();
    let measure = scaled.column("measure").unwrap();
    for (got, want) in measure.iter().zip([4.8, 11.7, 12.6, 24.0]) {
        assert!((got - want).abs() < 1e-9);
    }
    assert_eq!(scaled.column("timeDiagnosis"), table.column("timeDiagnosis"));
}

#[test]
fn write_then_read_back() {
    let table = patients().subset(&[1, 2], &[2]).unwrap();
    let mut buf = Vec::new();
    write_measure_table(&table, &mut buf, "idPatient", b'\t').unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text, "idPatient\tmeasure\nP02\t3.9\nP03\t4.2\n");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("subset.tsv");
    std::fs::write(&path, &text).unwrap();
    let config = TableReaderConfig {
        value_columns: None,
        ..TableReaderConfig::default()
    };
    let reread = read_measure_table_with_config(&path, &config).unwrap();
    assert_eq!(reread, table);
}
