//! Statement tokenizer for SQL scripts.
//!
//! Splits a script on `;` terminators that appear outside quoted text
//! (`'...'`, `"..."`, `` `...` ``) and outside comments (`-- ...`, `# ...`,
//! `/* ... */`). As in MySQL, `--` only opens a comment when followed by
//! whitespace, a control character or the end of the script. Fragments that contain nothing but whitespace and comments
//! are counted and dropped. MySQL executable comments (`/*! ... */`) count as
//! code.
//!
//! The tokenizer never fails: an unterminated string or comment simply runs
//! to the end of the script and the server gets to reject it.

/// One executable statement from a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement<'a> {
    /// 1-based position among the executable statements of the script.
    pub index: usize,
    sql: &'a str,
}

/// Executable statements plus the number of blank or comment-only fragments.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SplitScript<'a> {
    pub statements: Vec<Statement<'a>>,
    pub skipped: usize,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment,
    Quoted(u8),
}

pub fn split_statements(source: &str) -> SplitScript<'_> {
    let bytes = source.as_bytes();
    let mut split = SplitScript::default();
    let mut state = State::Code;
    // First code byte of the current fragment, if any.
    let mut code_start: Option<usize> = None;
    // Anything but whitespace seen since the last terminator.
    let mut has_content = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();

        match state {
            State::Code => {
                if !b.is_ascii_whitespace() && b != b';' {
                    has_content = true;
                }
                match b {
                    b';' => {
                        close_fragment(source, &mut split, code_start, i);
                        code_start = None;
                        has_content = false;
                    }
                    b'-' if next == Some(b'-') && opens_line_comment(bytes.get(i + 2)) => {
                        state = State::LineComment;
                        i += 1;
                    }
                    b'#' => state = State::LineComment,
                    b'/' if next == Some(b'*') => {
                        if bytes.get(i + 2) == Some(&b'!') {
                            code_start.get_or_insert(i);
                        }
                        state = State::BlockComment;
                        i += 1;
                    }
                    b'\'' | b'"' | b'`' => {
                        code_start.get_or_insert(i);
                        state = State::Quoted(b);
                    }
                    _ if b.is_ascii_whitespace() => {}
                    _ => {
                        code_start.get_or_insert(i);
                    }
                }
            }
            State::LineComment => {
                if b == b'\n' {
                    state = State::Code;
                }
            }
            State::BlockComment => {
                if b == b'*' && next == Some(b'/') {
                    state = State::Code;
                    i += 1;
                }
            }
            State::Quoted(quote) => {
                if b == b'\\' && quote != b'`' {
                    i += 1;
                } else if b == quote {
                    state = State::Code;
                }
            }
        }
        i += 1;
    }

    // Unterminated tail: a statement if it holds code, a skip if it holds only
    // comments, nothing if it is whitespace.
    if code_start.is_some() || has_content {
        close_fragment(source, &mut split, code_start, source.len());
    }

    split
}

fn opens_line_comment(third: Option<&u8>) -> bool {
    third.is_none_or(|c| c.is_ascii_whitespace() || c.is_ascii_control())
}

fn close_fragment<'a>(
    source: &'a str,
    split: &mut SplitScript<'a>,
    code_start: Option<usize>,
    end: usize,
) {
    match code_start {
        Some(start) => {
            let sql = source[start..end].trim_end();
            let index = split.statements.len() + 1;
            split.statements.push(Statement { index, sql });
        }
        None => split.skipped += 1,
    }
}

impl<'a> Statement<'a> {
    /// Statement text, starting at its first code character.
    pub fn sql(&self) -> &'a str {
        self.sql
    }

    /// Leading keyword, upper-cased (`CREATE`, `INSERT`, ...).
    pub fn verb(&self) -> String {
        self.sql
            .split(|c: char| c.is_whitespace() || c == '(')
            .next()
            .unwrap_or_default()
            .to_ascii_uppercase()
    }

    /// Table named by a `CREATE`, `ALTER` or `DROP TABLE` statement.
    pub fn target_table(&self) -> Option<&'a str> {
        let mut words = self.sql.split_whitespace();
        let verb = words.next()?;
        if !["create", "alter", "drop"]
            .iter()
            .any(|v| verb.eq_ignore_ascii_case(v))
        {
            return None;
        }

        let mut word = words.next()?;
        if word.eq_ignore_ascii_case("temporary") {
            word = words.next()?;
        }
        if !word.eq_ignore_ascii_case("table") {
            return None;
        }

        let mut name = words.next()?;
        if name.eq_ignore_ascii_case("if") {
            loop {
                let skipped = words.next()?;
                if skipped.eq_ignore_ascii_case("exists") {
                    break;
                }
            }
            name = words.next()?;
        }

        let name = name
            .split('(')
            .next()
            .unwrap_or_default()
            .trim_end_matches(';')
            .trim_matches('`');
        if name.is_empty() { None } else { Some(name) }
    }

    /// Short description used in log lines.
    pub fn label(&self) -> String {
        match self.target_table() {
            Some(table) => format!("{} TABLE {}", self.verb(), table),
            None => format!("{} statement", self.verb()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqls<'a>(split: &SplitScript<'a>) -> Vec<&'a str> {
        split.statements.iter().map(|s| s.sql()).collect()
    }

    #[test]
    fn test_splits_on_terminators() {
        let split = split_statements("CREATE TABLE a (id INT);\nCREATE TABLE b (id INT);\n");
        assert_eq!(
            sqls(&split),
            vec!["CREATE TABLE a (id INT)", "CREATE TABLE b (id INT)"]
        );
        assert_eq!(split.skipped, 0);
        assert_eq!(split.statements[1].index, 2);
    }

    #[test]
    fn test_blank_and_comment_only_fragments_are_skipped() {
        let script = "-- users\n;\n   ;\n/* nothing here */;\n# hash comment\n;SELECT 1;";
        let split = split_statements(script);
        assert_eq!(sqls(&split), vec!["SELECT 1"]);
        assert_eq!(split.skipped, 4);
    }

    #[test]
    fn test_leading_comment_does_not_hide_statement() {
        let script = "-- Table: users\nCREATE TABLE users (id INT);";
        let split = split_statements(script);
        assert_eq!(sqls(&split), vec!["CREATE TABLE users (id INT)"]);
    }

    #[test]
    fn test_double_dash_without_space_is_code() {
        let split = split_statements("SELECT 5--3;\nSELECT 1;");
        assert_eq!(sqls(&split), vec!["SELECT 5--3", "SELECT 1"]);
        assert_eq!(split.skipped, 0);
    }

    #[test]
    fn test_double_dash_comment_needs_whitespace_or_end() {
        let split = split_statements("SELECT 1 --\tnote; still comment\n;SELECT 2;--");
        assert_eq!(sqls(&split), vec!["SELECT 1 --\tnote; still comment", "SELECT 2"]);
        assert_eq!(split.skipped, 1);
    }

    #[test]
    fn test_terminators_inside_strings_and_comments() {
        let script = "INSERT INTO t VALUES ('a;b', \"c;d\", `e;f`); -- x; y\nSELECT '/*;*/';";
        let split = split_statements(script);
        assert_eq!(
            sqls(&split),
            vec![
                "INSERT INTO t VALUES ('a;b', \"c;d\", `e;f`)",
                "SELECT '/*;*/'"
            ]
        );
    }

    #[test]
    fn test_escaped_quotes() {
        let script = "SELECT 'it\\'s; fine'; SELECT 'doubled '' quote; still';";
        let split = split_statements(script);
        assert_eq!(split.statements.len(), 2);
        assert_eq!(split.statements[0].sql(), "SELECT 'it\\'s; fine'");
        assert_eq!(split.statements[1].sql(), "SELECT 'doubled '' quote; still'");
    }

    #[test]
    fn test_trailing_statement_without_terminator() {
        let split = split_statements("SELECT 1;\nSELECT 2\n");
        assert_eq!(sqls(&split), vec!["SELECT 1", "SELECT 2"]);
    }

    #[test]
    fn test_trailing_whitespace_is_not_a_fragment() {
        let split = split_statements("SELECT 1;\n\n   ");
        assert_eq!(split.statements.len(), 1);
        assert_eq!(split.skipped, 0);
    }

    #[test]
    fn test_trailing_comment_is_skipped() {
        let split = split_statements("SELECT 1;\n-- end of file\n");
        assert_eq!(split.statements.len(), 1);
        assert_eq!(split.skipped, 1);
    }

    #[test]
    fn test_executable_comment_counts_as_code() {
        let split = split_statements("/*!40101 SET NAMES utf8 */;");
        assert_eq!(sqls(&split), vec!["/*!40101 SET NAMES utf8 */"]);
    }

    #[test]
    fn test_empty_script() {
        let split = split_statements("");
        assert!(split.statements.is_empty());
        assert_eq!(split.skipped, 0);
    }

    #[test]
    fn test_target_table() {
        let cases = [
            ("CREATE TABLE users (id INT)", Some("users")),
            ("CREATE TABLE IF NOT EXISTS `courses` (id INT)", Some("courses")),
            ("create table families(id INT)", Some("families")),
            ("CREATE TEMPORARY TABLE scratch (id INT)", Some("scratch")),
            ("ALTER TABLE subjects ADD COLUMN x INT", Some("subjects")),
            ("DROP TABLE IF EXISTS grades", Some("grades")),
            ("CREATE INDEX idx ON users (email)", None),
            ("INSERT INTO users VALUES (1)", None),
            ("ALTER", None),
        ];
        for (sql, expected) in cases {
            let statement = Statement { index: 1, sql };
            assert_eq!(statement.target_table(), expected, "{sql}");
        }
    }

    #[test]
    fn test_label() {
        let create = Statement {
            index: 1,
            sql: "CREATE TABLE IF NOT EXISTS users (id INT)",
        };
        assert_eq!(create.label(), "CREATE TABLE users");

        let insert = Statement {
            index: 2,
            sql: "insert into roles values (1)",
        };
        assert_eq!(insert.label(), "INSERT statement");
    }
}
