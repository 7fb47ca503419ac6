//! Builds one document that exercises every kind of assignment and prints it
//! pretty-printed.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonchain --features serde_json --example chain_demo
//! ```
#![allow(missing_docs)]

use jsonchain::{BuildResult, Builder, Document};

struct Record {
    value1: String,
    value2: String,
}

fn record_document(record: &Record) -> BuildResult<Document> {
    Ok(Builder::new()
        .at("/P0")?
        .set(&record.value1)
        .at("/P1")?
        .set(&record.value2)
        .build())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let variable_int = 3;
    let variable_str = "4";
    let variable_string = String::from("5");
    let number_list = vec![6, 7];
    let string_list = vec![String::from("8"), String::from("9")];
    let records = vec![
        Record {
            value1: "16".into(),
            value2: "17".into(),
        },
        Record {
            value1: "18".into(),
            value2: "19".into(),
        },
    ];

    let document = Builder::new()
        .at("/A")?
        .set_null()
        .at("/B")?
        .set(false)
        .at("/C")?
        .set(0)
        .at("/D")?
        .set(0.5)
        .at_fmt(format_args!("/E({})", 1))?
        .set_fmt(format_args!("({})", 2))?
        .at("/F")?
        .set(variable_int)
        .at("/G")?
        .set(variable_str)
        .at("/H")?
        .set(&variable_string)
        .at("/I")?
        .set_list(&number_list)?
        .at("/J")?
        .set_list(&string_list)?
        .at("/K")?
        .set_list(["10", "11"])?
        .at("/L")?
        .set_list([12, 13])?
        .at("/M")?
        .set(Builder::new().at("/N")?.set(14).at("/O")?.set(15).build())
        .at("/P")?
        .set_list_of_documents(&records, record_document)?
        .build();

    let json = serde_json::Value::from(document);
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
