//! End-to-end integration tests
//!
//! These tests read the fixture files in tests/fixtures/ through the public
//! API only. `sale_records.csv` holds a 14-column header followed by 13 data
//! rows, one of them with a quoted field containing a comma.
//!
//! Failures coming from the file are expected to be logged, so a few tests
//! install a capturing `tracing` subscriber for the duration of the call.

#[cfg(test)]
mod tests {
    use csv_file_reader::{read_all, read_batches, CsvFileReader, CsvReadError};
    use rstest::rstest;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    const SALE_RECORDS: &str = "tests/fixtures/sale_records.csv";
    const HEADER_COLUMNS: usize = 14;
    const DATA_ROWS: usize = 13;

    /// Log output shared between the subscriber and the test
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` with a subscriber that records every event, returning its logs
    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        (result, output)
    }

    #[rstest]
    #[case::lower_case(SALE_RECORDS)]
    #[case::upper_case("tests/fixtures/SALE_RECORDS.CSV")]
    fn test_read_all_fixture(#[case] path: &str) {
        let rows = read_all(path).unwrap();

        // The header line is data in whole-file mode
        assert_eq!(rows.len(), DATA_ROWS + 1);
        assert!(rows.iter().all(|row| row.len() == HEADER_COLUMNS));
        assert_eq!(rows[0][0], "Region");
        assert_eq!(rows[5][1], "Korea, South");
    }

    #[test]
    fn test_read_all_through_reader_object() {
        let mut reader = CsvFileReader::new();
        reader.set_path(SALE_RECORDS);

        let from_object = reader.read_all().unwrap();
        let from_function = read_all(SALE_RECORDS).unwrap();

        assert_eq!(from_object, from_function);
        assert_eq!(CsvFileReader::with_path(SALE_RECORDS).read_all().unwrap(), from_function);
    }

    #[test]
    fn test_read_all_twice_is_identical() {
        assert_eq!(read_all(SALE_RECORDS).unwrap(), read_all(SALE_RECORDS).unwrap());
    }

    #[rstest]
    #[case::one_partial_batch(100, vec![13])]
    #[case::full_then_partial(12, vec![12, 1])]
    #[case::exact_fit(13, vec![13])]
    #[case::small_batches(5, vec![5, 5, 3])]
    fn test_read_batch_fixture(#[case] batch_size: usize, #[case] expected: Vec<usize>) {
        let reader = CsvFileReader::with_path(SALE_RECORDS);
        let mut sizes = Vec::new();

        let delivered = reader
            .read_batch(batch_size, |header, rows| {
                assert_eq!(header.len(), HEADER_COLUMNS);
                assert_eq!(header[0], "Region");
                sizes.push(rows.len());
            })
            .unwrap();

        assert_eq!(delivered, expected.len());
        assert_eq!(sizes, expected);
    }

    #[test]
    fn test_batches_cover_every_data_row_once() {
        let whole = read_all(SALE_RECORDS).unwrap();

        let batched: Vec<_> = read_batches(SALE_RECORDS, 4)
            .unwrap()
            .flat_map(|batch| batch.unwrap().into_rows())
            .collect();

        assert_eq!(batched, whole[1..]);
    }

    #[test]
    fn test_caller_can_stop_early() {
        let mut reader = read_batches(SALE_RECORDS, 3).unwrap();

        let taken: Vec<_> = reader.by_ref().take(2).map(Result::unwrap).collect();

        assert_eq!(taken.len(), 2);
        assert_eq!(reader.header().map(Vec::len), Some(HEADER_COLUMNS));
    }

    #[rstest]
    #[case::xlsx("tests/fixtures/SaleRecords.xlsx")]
    #[case::xls("abc.xls")]
    #[case::no_extension("tests/fixtures/sale_records")]
    fn test_wrong_extension_is_refused(#[case] path: &str) {
        let (result, logs) = with_captured_logs(|| read_all(path));

        assert_eq!(
            result,
            Err(CsvReadError::UnsupportedFileType {
                path: path.to_string()
            })
        );
        assert!(logs.is_empty(), "validation errors are not logged: {}", logs);

        let batch = CsvFileReader::with_path(path).read_batch(100, |_, _| {});
        assert!(matches!(batch, Err(CsvReadError::UnsupportedFileType { .. })));
    }

    #[test]
    fn test_missing_file_is_logged_and_returned() {
        let (result, logs) = with_captured_logs(|| read_all("SaleRecords.csv"));

        assert!(matches!(result, Err(CsvReadError::FileNotFound { .. })));
        assert!(logs.contains("ERROR"), "missing error log: {}", logs);
        assert!(logs.contains("CsvFileReader"));
        assert!(logs.contains("read_all"));
    }

    #[test]
    fn test_missing_file_in_batch_mode_is_logged() {
        let reader = CsvFileReader::with_path("SaleRecords.csv");

        let (result, logs) = with_captured_logs(|| reader.read_batch(100, |_, _| {}));

        assert!(matches!(result, Err(CsvReadError::FileNotFound { .. })));
        assert!(logs.contains("read_batch"), "missing error log: {}", logs);
    }

    /// Header plus two rows, then a line that is not valid UTF-8
    fn invalid_utf8_csv() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(b"id,name\n1,a\n2,b\n\xff,c\n4,d\n")
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_read_all_failure_mid_file_is_logged() {
        let file = invalid_utf8_csv();

        let (result, logs) = with_captured_logs(|| read_all(file.path()));

        let error = result.unwrap_err();
        assert_eq!(error.partial_rows().map(<[_]>::len), Some(3));
        assert!(logs.contains("ERROR"), "missing error log: {}", logs);
        assert!(logs.contains("read_all"), "missing operation: {}", logs);
    }

    #[test]
    fn test_read_batch_failure_mid_file_is_logged() {
        let file = invalid_utf8_csv();
        let reader = CsvFileReader::with_path(file.path());
        let mut delivered = Vec::new();

        let (result, logs) =
            with_captured_logs(|| reader.read_batch(10, |_, rows| delivered.push(rows.len())));

        assert!(matches!(result, Err(CsvReadError::PartialRead { .. })));
        assert!(delivered.is_empty());
        assert!(logs.contains("ERROR"), "missing error log: {}", logs);
        assert!(logs.contains("read_batch"), "missing operation: {}", logs);
    }

    #[test]
    fn test_directory_is_not_found() {
        let dir = tempfile::Builder::new()
            .suffix(".csv")
            .tempdir()
            .expect("Failed to create temp dir");

        let (result, logs) = with_captured_logs(|| read_all(dir.path()));

        assert!(matches!(result, Err(CsvReadError::FileNotFound { .. })));
        assert!(logs.contains("read_all"), "missing error log: {}", logs);
        assert!(matches!(
            read_batches(dir.path(), 10),
            Err(CsvReadError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_unset_path() {
        let reader = CsvFileReader::new();

        assert_eq!(reader.read_all(), Err(CsvReadError::MissingPath));
        assert_eq!(
            reader.read_batch(100, |_, _| {}),
            Err(CsvReadError::MissingPath)
        );
    }

    #[test]
    fn test_zero_batch_size_regardless_of_file() {
        for path in [SALE_RECORDS, "nonexistent.csv"] {
            let result = CsvFileReader::with_path(path).read_batch(0, |_, _| {});
            assert_eq!(result, Err(CsvReadError::InvalidBatchSize { value: 0 }));
        }
    }
}
