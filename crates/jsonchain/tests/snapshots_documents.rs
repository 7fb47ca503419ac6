#![expect(missing_docs)]

use core::fmt::Write;

use jsonchain::{BuildResult, Builder, Selecting};

fn render_steps(steps: &[(&str, i64)]) -> BuildResult<String> {
    let mut out = String::new();
    let mut state = Builder::new();
    for (path, value) in steps {
        state = state.at(path)?.set(*value);
    }
    let doc = state.build();
    write!(out, "{doc}").expect("writing to a String cannot fail");
    Ok(out)
}

#[test]
fn snapshot_container_creation() -> BuildResult<()> {
    insta::assert_snapshot!(render_steps(&[("/a/b/c", 1)])?, @r#"{"a":{"b":{"c":1}}}"#);
    insta::assert_snapshot!(render_steps(&[("/a/2", 1)])?, @r#"{"a":[null,null,1]}"#);
    insta::assert_snapshot!(render_steps(&[("/a/0/b/1", 1)])?, @r#"{"a":[{"b":[null,1]}]}"#);
    Ok(())
}

#[test]
fn snapshot_lossy_overwrites() -> BuildResult<()> {
    insta::assert_snapshot!(
        render_steps(&[("/a", 1), ("/a/b", 2)])?,
        @r#"{"a":{"b":2}}"#
    );
    insta::assert_snapshot!(
        render_steps(&[("/a", 1), ("/a/0", 2)])?,
        @r#"{"a":[2]}"#
    );
    insta::assert_snapshot!(
        render_steps(&[("/a/0", 1), ("/a/b", 2)])?,
        @r#"{"a":{"b":2}}"#
    );
    insta::assert_snapshot!(
        render_steps(&[("/a/b", 1), ("/a/0", 2)])?,
        @r#"{"a":{"0":2,"b":1}}"#
    );
    Ok(())
}

#[test]
fn snapshot_small_capacity_builder() -> BuildResult<()> {
    let doc = Selecting::<32>::new()
        .at_fmt(format_args!("/user/{}/name", 7))?
        .set_fmt(format_args!("{}-{}", "ada", 1815))?
        .build();
    insta::assert_snapshot!(doc.to_string(), @r#"{"user":[null,null,null,null,null,null,null,{"name":"ada-1815"}]}"#);
    Ok(())
}
