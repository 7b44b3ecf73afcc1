pub mod measure_table;

pub use measure_table::{
    read_measure_table_from_reader, read_measure_table_with_config, read_measure_tsv,
    write_measure_table, MeasureTable, TableReaderConfig,
};
