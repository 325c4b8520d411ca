use arithmos::CharacterValueTable;
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(table) = CharacterValueTable::from_csv_reader(data) {
                let csv = table.to_csv_string().unwrap();
                let again = CharacterValueTable::from_csv_reader(csv.as_bytes()).unwrap();
                assert_eq!(table.len(), again.len());
            }
        });
    }
}
