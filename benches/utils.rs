use std::collections::HashMap;
use std::fmt::{Debug, Display};

pub fn median(runtimes: &mut [u128]) -> u128 {
    if runtimes.is_empty() {
        return 0;
    }
    runtimes.sort_unstable();
    runtimes[runtimes.len() / 2]
}

pub fn print_table<N>(
    result: &HashMap<String, HashMap<String, N>>,
    rows: &[String],
    columns: &[&str],
) where
    N: Display + Debug + Default,
{
    let cell_w = 15;
    let df = N::default();
    let divider = "-".repeat(columns.len() * (cell_w + 2) + 1);

    println!("{divider}");
    let mut header = String::from("| ");
    for c in columns {
        header.push_str(&format!("{c:<cell_w$}| "));
    }
    println!("{header}");
    println!("{divider}");

    for hr in rows {
        let Some(r) = result.get(hr) else { continue };
        let mut row = format!("| {hr:<cell_w$}| ");

        for c in columns.iter().skip(1) {
            let cell = r.get(&c.to_string()).unwrap_or(&df);
            row.push_str(&format!("{:<cell_w$}| ", cell));
        }

        println!("{row}");
    }

    println!("{divider}");
}
