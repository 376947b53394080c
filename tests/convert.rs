use std::fs;
use std::path::Path;

use automation_setup_tools::convert;
use automation_setup_tools::io::excel_read;
use automation_setup_tools::ToolError;
use rust_xlsxwriter::Workbook;
use tempfile::tempdir;

fn write_accounts_workbook(path: &Path) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let headers = ["  Account Name ", "TYPE", "Opening Balance\t", " Active"];
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .expect("header written");
    }

    let rows: [(&str, &str, f64, bool); 3] = [
        ("Checking", "asset", 1250.0, true),
        ("Savings", "asset", 99.5, false),
        ("Credit Card, Visa", "liability", -300.0, true),
    ];
    for (idx, (name, kind, balance, active)) in rows.iter().enumerate() {
        let row = (idx + 1) as u32;
        worksheet.write_string(row, 0, *name).expect("name written");
        worksheet.write_string(row, 1, *kind).expect("type written");
        worksheet.write_number(row, 2, *balance).expect("balance written");
        worksheet.write_boolean(row, 3, *active).expect("flag written");
    }

    workbook.save(path).expect("workbook saved");
}

#[test]
fn headers_are_trimmed_and_lowercased() {
    let temp_dir = tempdir().expect("temporary directory");
    let source = temp_dir.path().join("accounts.xlsx");
    write_accounts_workbook(&source);

    let written = convert::convert_to_csv(&source, None).expect("conversion succeeds");
    assert_eq!(written, temp_dir.path().join("accounts.csv"));

    let output = fs::read_to_string(&written).expect("CSV read");
    assert_eq!(
        output,
        "account name,type,opening balance,active\n\
         Checking,asset,1250,True\n\
         Savings,asset,99.5,False\n\
         \"Credit Card, Visa\",liability,-300,True\n"
    );
}

#[test]
fn output_has_one_line_per_record() {
    let temp_dir = tempdir().expect("temporary directory");
    let source = temp_dir.path().join("accounts.xlsx");
    write_accounts_workbook(&source);

    let dataset = excel_read::read_dataset(&source).expect("workbook read");
    let written = convert::convert_to_csv(&source, None).expect("conversion succeeds");

    let output = fs::read_to_string(&written).expect("CSV read");
    assert_eq!(output.lines().count(), dataset.row_count() + 1);
    assert_eq!(dataset.row_count(), 3);
}

#[test]
fn explicit_destination_is_used_verbatim() {
    let temp_dir = tempdir().expect("temporary directory");
    let source = temp_dir.path().join("accounts.xlsx");
    write_accounts_workbook(&source);
    let destination = temp_dir.path().join("exports").join("import-ready.txt");
    fs::create_dir_all(destination.parent().expect("parent dir")).expect("exports dir");

    let written = convert::convert_excel_to_csv(&source, Some(&destination));

    assert_eq!(written.as_deref(), Some(destination.as_path()));
    assert!(destination.exists());
    assert!(!temp_dir.path().join("accounts.csv").exists());
}

#[test]
fn blank_cells_and_headers_are_preserved_as_columns() {
    let temp_dir = tempdir().expect("temporary directory");
    let source = temp_dir.path().join("sparse.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "IBAN").expect("header");
    worksheet.write_string(0, 2, "Notes").expect("header");
    worksheet.write_string(1, 0, "NL91ABNA0417164300").expect("cell");
    worksheet.write_string(2, 2, "closed").expect("cell");
    workbook.save(&source).expect("workbook saved");

    let written = convert::convert_to_csv(&source, None).expect("conversion succeeds");
    let output = fs::read_to_string(&written).expect("CSV read");

    assert_eq!(
        output,
        "iban,unnamed: 1,notes\nNL91ABNA0417164300,,\n,,closed\n"
    );
}

#[test]
fn header_starting_after_column_a_keeps_leading_column() {
    let temp_dir = tempdir().expect("temporary directory");
    let source = temp_dir.path().join("offset.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 1, "Name").expect("header");
    worksheet.write_string(1, 1, "A").expect("cell");
    workbook.save(&source).expect("workbook saved");

    let written = convert::convert_to_csv(&source, None).expect("conversion succeeds");
    assert_eq!(
        fs::read_to_string(&written).expect("CSV read"),
        "unnamed: 0,name\n,A\n"
    );
}

#[test]
fn empty_worksheet_produces_empty_file() {
    let temp_dir = tempdir().expect("temporary directory");
    let source = temp_dir.path().join("empty.xlsx");

    let mut workbook = Workbook::new();
    workbook.add_worksheet();
    workbook.save(&source).expect("workbook saved");

    let written = convert::convert_to_csv(&source, None).expect("conversion succeeds");
    assert_eq!(fs::read_to_string(&written).expect("CSV read"), "");
}

#[test]
fn only_first_worksheet_is_converted() {
    let temp_dir = tempdir().expect("temporary directory");
    let source = temp_dir.path().join("multi.xlsx");

    let mut workbook = Workbook::new();
    workbook
        .add_worksheet()
        .write_string(0, 0, "First")
        .expect("first sheet");
    workbook
        .add_worksheet()
        .write_string(0, 0, "Second")
        .expect("second sheet");
    workbook.save(&source).expect("workbook saved");

    let written = convert::convert_to_csv(&source, None).expect("conversion succeeds");
    assert_eq!(fs::read_to_string(&written).expect("CSV read"), "first\n");
}

#[test]
fn unreadable_spreadsheet_returns_none() {
    let temp_dir = tempdir().expect("temporary directory");
    let source = temp_dir.path().join("broken.xlsx");
    fs::write(&source, "this is not a workbook").expect("fixture written");

    assert!(matches!(
        convert::convert_to_csv(&source, None),
        Err(ToolError::ExcelRead(_))
    ));
    assert_eq!(convert::convert_excel_to_csv(&source, None), None);
}
