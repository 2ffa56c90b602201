use crate::common::load_fixture;

#[test]
fn test_poem() {
    let entry = load_fixture("dev", "poem.txt");
    assert_eq!(
        entry.content(),
        "line one<br />\nline two\n</div><div class=\"stuff\">\n\
         line three\n</div><div class=\"stuff\">\nAfter\n"
    );
}

#[test]
fn test_poem_running_to_end_of_file() {
    let entry = load_fixture("dev", "haiku.txt");
    assert_eq!(
        entry.content(),
        "Intro\n</div><div class=\"stuff\">\nold pond<br />\nfrog jumps in"
    );
}

#[test]
fn test_code() {
    let entry = load_fixture("dev", "code.txt");
    insta::assert_snapshot!(entry.content(), @r#"
Some code:
<pre>
fn main() {
    println!("hi");

}
</pre>
Done.
"#);
}

#[test]
fn test_footnote() {
    let entry = load_fixture("dev", "footnote.txt");
    insta::assert_snapshot!(entry.content(), @r#"
Text one<a name='tx1' href='#nm1'><sup>1</sup></a>More text<a name='tx2' href='#nm2'><sup>2</sup></a>End

<hr />
<a name='nm1' href='#tx1'><sup>1</sup></a>
First note.

<br />
<a name='nm2' href='#tx2'><sup>2</sup></a>
Second note.
"#);
}

#[test]
fn test_footnote_references_are_consistent() {
    let entry = load_fixture("dev", "footnote.txt");
    let content = entry.content();
    for n in 1..=2 {
        assert!(content.contains(&format!("name='tx{n}' href='#nm{n}'")));
        assert!(content.contains(&format!("name='nm{n}' href='#tx{n}'")));
    }
    assert!(!content.contains("tx3"));
}
