//! Whole-body conversion tests.
//!
//! Each test feeds wiki text through `convert_lines` and checks the emitted
//! DocBook body, plus the structural invariant that every element is closed.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::converting::{LineTransducer, convert_lines, source_lines};

fn convert(text: &str) -> String {
    let out = convert_lines(text);
    invariants::check(&out);
    out
}

#[rstest]
#[case("=== Deep ===")]
#[case("===Deep===")]
#[case("=== a = b ===")]
fn triple_marks_are_level_three(#[case] line: &str) {
    let out = convert(line);
    assert!(out.starts_with("<sect1> <sect2> <sect3> <title>"));
    assert_eq!(out.matches("<sect3>").count(), 1);
}

#[test]
fn contiguous_bullets_make_one_list() {
    let out = convert("* item one\n* item two\n");
    assert_eq!(out.matches("<itemizedlist>").count(), 1);
    assert_eq!(out.matches("<listitem>").count(), 2);
    assert_eq!(out.matches("</itemizedlist>").count(), 1);
}

#[test]
fn blank_line_between_bullets_makes_two_lists() {
    let out = convert("* item one\n\n* item two\n");
    assert_eq!(
        out,
        "<itemizedlist> <listitem><para>item one</para></listitem>\n\
         </itemizedlist>\n\
         <itemizedlist> <listitem><para>item two</para></listitem>\n\
         </itemizedlist>\n"
    );
}

#[test]
fn link_text_escaped_exactly_once() {
    let out = convert("[http://x.com \"a & b\"]");
    assert_eq!(
        out,
        "<para> <ulink url=\"http://x.com\">\"a &amp; b\"</ulink>\n</para>\n"
    );
    assert_eq!(out.matches("&amp;").count(), 1);
}

#[test]
fn level_two_after_level_three_under_level_one() {
    let mut t = LineTransducer::new();
    for line in source_lines("= One =\n== Two ==\n=== Three ===\n") {
        t.push(line);
    }
    let mark = t.output().len();
    t.push("== Again ==");
    assert_eq!(t.context().section_depth, 2);

    let tail = &t.output()[mark..];
    assert_eq!(tail, "</sect3>\n</sect2> <sect2> <title>Again</title>\n");
    assert!(!tail.contains("sect1"));
}

#[test]
fn two_column_table_then_text() {
    let out = convert("|| a || b ||\n|| c || d ||\nplain\n");
    assert!(out.contains("<tgroup cols='2'"));
    assert_eq!(out.matches("<row>").count(), 2);
    assert_eq!(out.matches("<entry>").count(), 4);

    let table_end = out.find("</table>").unwrap();
    let para = out.find("<para> plain").unwrap();
    assert!(table_end < para);
}

#[test]
fn open_sections_closed_once_innermost_first() {
    let out = convert("= A =\n== B ==\n=== C ===\ntext\n");
    assert!(out.ends_with("</para>\n</sect3>\n</sect2>\n</sect1>\n"));
    for level in 1..=3 {
        assert_eq!(out.matches(&format!("</sect{level}>")).count(), 1);
    }
}

#[test]
fn inline_markup_in_every_text_position() {
    let out = convert(
        "= *Bold* title =\n* item with `code`\n|| _cell_ || [http://x.org X] ||\nline with *b*\n",
    );
    assert!(out.contains("<title><emphasis role=\"bold\">Bold</emphasis> title</title>"));
    assert!(out.contains("<para>item with <literal>code</literal></para>"));
    assert!(out.contains("<entry><emphasis>cell</emphasis></entry>"));
    assert!(out.contains("<entry><ulink url=\"http://x.org\">X</ulink></entry>"));
    assert!(out.contains("line with <emphasis role=\"bold\">b</emphasis>"));
}

#[test]
fn literal_block_content_is_not_markup() {
    let out = convert("{{{\n* not a list\n#define X <1>\n[not.png]\n}}}\n");
    assert_eq!(
        out,
        "<screen>\n* not a list\n#define X &lt;1&gt;\n[not.png]\n</screen>\n"
    );
}

#[test]
fn empty_input_produces_nothing() {
    assert_eq!(convert(""), "");
    assert_eq!(convert("\n\n\n"), "");
}

#[test]
fn malformed_markup_degrades_to_text() {
    let out = convert("= unbalanced\n||\n[unclosed\n");
    assert!(out.contains("= unbalanced"));
    assert!(out.contains("[unclosed"));
}

#[rstest]
#[case("*a [http://x b* c]", "<para> *a <ulink url=\"http://x\">b* c</ulink>\n</para>\n")]
#[case("[http://x a *b] c*", "<para> <ulink url=\"http://x\">a *b</ulink> c*\n</para>\n")]
#[case(
    "_x [http://x _y_] z_",
    "<para> <emphasis>x <ulink url=\"http://x\"><emphasis>y</emphasis></ulink> z</emphasis>\n</para>\n"
)]
fn emphasis_never_crosses_a_link(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(convert(line), expected);
}

#[test]
fn quote_in_link_url_stays_well_formed() {
    assert_eq!(
        convert("[http://x\"y z]"),
        "<para> <ulink url=\"http://x\">\"y z</ulink>\n</para>\n"
    );
}
