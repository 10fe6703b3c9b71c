// 章分割 - 見出し行の検出によるテキスト分割
//
// 見出し行 = 英大文字・数字・`?,!'`・空白のみから成る行。
// 空白はASCIIの`\t\n\f\r `のみで、NBSPなどのUnicode空白は本文扱い。
// 並列処理コアとは独立した純粋な変換関数として提供する。

use regex::Regex;

/// 見出し行のパターン（末尾の改行ごとマッチ）
pub const HEADING_PATTERN: &str = r"(?m)^[A-Z0-9?,!'\t\n\f\r ]+$(?:\n|\z)";

/// 空行のパターン
pub const BLANK_LINE_PATTERN: &str = r"(?m)^[\t\n\f\r ]*\n";

/// 章分割器
///
/// 正規表現のコンパイルは生成時に一度だけ行う。
#[derive(Debug, Clone)]
pub struct ChapterSegmenter {
    heading: Regex,
    blank_line: Regex,
}

impl ChapterSegmenter {
    pub fn new() -> Self {
        Self {
            heading: Regex::new(HEADING_PATTERN).expect("heading pattern is a valid constant"),
            blank_line: Regex::new(BLANK_LINE_PATTERN)
                .expect("blank line pattern is a valid constant"),
        }
    }

    /// 空行を全て取り除く
    pub fn remove_blank_lines(&self, text: &str) -> String {
        self.blank_line.replace_all(text, "").into_owned()
    }

    /// テキストを章の列に分割する
    ///
    /// 空行を除去したあと、各見出しと次の見出しまでの本文を組にする。
    /// 最初の見出しより前のテキストは捨てる。見出しが無ければ空の列を返す。
    pub fn split(&self, text: &str) -> Vec<String> {
        let text = self.remove_blank_lines(text);

        let headings: Vec<&str> = self.heading.find_iter(&text).map(|m| m.as_str()).collect();
        // contents[0]は最初の見出しより前の部分
        let contents: Vec<&str> = self.heading.split(&text).collect();

        headings
            .iter()
            .enumerate()
            .map(|(i, heading)| {
                let body = contents.get(i + 1).map(|c| c.trim()).unwrap_or("");
                format!("{}\n{}", heading.trim(), body)
            })
            .collect()
    }

    /// 1行が見出しとして扱われるかどうか
    pub fn is_heading(&self, line: &str) -> bool {
        !line.trim().is_empty() && self.heading.is_match(line)
    }
}

impl Default for ChapterSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// デフォルトの分割器で章に分割する
pub fn split_into_chapters(text: &str) -> Vec<String> {
    ChapterSegmenter::new().split(text)
}
