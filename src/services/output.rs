use crate::domain::models::JsonOut;
use serde::Serialize;
use std::io::Write;

pub fn print_json<T: Serialize>(ok: bool, data: T) -> anyhow::Result<()> {
    write_json(&mut std::io::stdout().lock(), ok, data)
}

pub fn write_json<T: Serialize>(
    out: &mut impl Write,
    ok: bool,
    data: T,
) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(&JsonOut { ok, data })?;
    writeln!(out, "{body}")?;
    out.flush()?;
    Ok(())
}

pub fn print_rows<T>(data: &[T], row: impl Fn(&T) -> String) {
    for d in data {
        println!("{}", row(d));
    }
}
