#![no_main]
use arbitrary::Arbitrary;
use jsonchain::{BuildError, Selecting, Value};
use libfuzzer_sys::fuzz_target;

// Small enough that generated paths and strings regularly overrun it.
const CAPACITY: usize = 64;

// In-range indices pad arrays with nulls; cap them so inputs stay small.
const MAX_FUZZ_INDEX: u64 = 1 << 16;

#[derive(Arbitrary, Debug)]
enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<&Scalar> for Value {
    fn from(s: &Scalar) -> Self {
        match s {
            Scalar::Null => Value::Null,
            Scalar::Bool(b) => Value::from(*b),
            Scalar::Int(i) => Value::from(*i),
            Scalar::Float(f) => Value::from(*f),
            Scalar::Str(s) => Value::from(s.as_str()),
        }
    }
}

#[derive(Arbitrary, Debug)]
enum Op {
    Set { path: String, value: Scalar },
    SetFmt { path: String, text: String },
    List { path: String, items: Vec<i64> },
}

fn sparse_index(path: &str) -> bool {
    path.split('/')
        .filter_map(|t| t.parse::<u64>().ok())
        .any(|i| i > MAX_FUZZ_INDEX && i < u64::from(u32::MAX))
}

impl Op {
    fn path(&self) -> &str {
        match self {
            Op::Set { path, .. } | Op::SetFmt { path, .. } | Op::List { path, .. } => path,
        }
    }
}

fn run(ops: &[Op]) -> Result<(), BuildError> {
    if ops.iter().any(|op| sparse_index(op.path())) {
        return Ok(());
    }

    let mut state = Selecting::<CAPACITY>::new();
    let mut last_set: Option<(&str, Value)> = None;

    for op in ops {
        last_set = None;
        state = match op {
            Op::Set { path, value } => {
                let value = Value::from(value);
                last_set = Some((path.as_str(), value.clone()));
                state.at(path)?.set(value)
            }
            Op::SetFmt { path, text } => state.at(path)?.set_fmt(format_args!("{text}"))?,
            Op::List { path, items } => state.at(path)?.set_list(items)?,
        };
    }

    let doc = state.build();
    let text = doc.to_string();
    serde_json::from_str::<serde_json::Value>(&text).expect("builder produced invalid JSON");

    if let Some((path, value)) = last_set {
        // `-` appends, so reading it back addresses nothing.
        if !path.split('/').any(|t| t == "-") {
            let found = doc.pointer(path).expect("last write is readable");
            if !matches!(value, Value::Number(n) if n.as_f64().is_nan()) {
                assert_eq!(found, &value);
            }
        }
    }
    Ok(())
}

fuzz_target!(|ops: Vec<Op>| {
    match run(&ops) {
        Ok(()) | Err(BuildError::BufferOverrun { .. } | BuildError::InvalidPath { .. }) => {}
        Err(e) => panic!("unexpected error: {e}"),
    }
});
