//! Greedy word wrapping against a pixel width.

use crate::draw::TextMeasurer;

/// Returns the offset just past the word starting at `start`.
///
/// Leading spaces are skipped first; the word then runs until the next space,
/// newline or the end of `chars`. A run made only of spaces yields an empty
/// word that still advances past the spaces.
pub fn end_of_word(chars: &[char], start: usize) -> usize {
    let mut p = start;
    while p < chars.len() && chars[p] == ' ' {
        p += 1;
    }
    while p < chars.len() && chars[p] != ' ' && chars[p] != '\n' {
        p += 1;
    }
    p
}

/// Splits `text` into lines no wider than `max_width`.
///
/// Words are packed greedily. `\n` forces a break and an empty line between
/// two newlines is kept as `""`. Wrapped lines never start with a space. A
/// word that cannot fit on a line by itself is broken between characters;
/// every line holds at least one character, so a non-positive `max_width`
/// degenerates to one character per line.
pub fn split_text<M>(measurer: &M, text: &str, max_width: f64) -> Vec<String>
where
    M: TextMeasurer + ?Sized,
{
    let chars: Vec<char> = text.chars().collect();
    let slice = |from: usize, to: usize| chars[from..to].iter().collect::<String>();
    let too_wide =
        |from: usize, to: usize| measurer.measure_text_width(&slice(from, to)) >= max_width;

    let mut lines = Vec::new();
    let mut line = 0;
    loop {
        while line < chars.len() && chars[line] == ' ' {
            line += 1;
        }

        let mut end_line = line;
        loop {
            if end_line >= chars.len() {
                if end_line > line {
                    push_line(&mut lines, slice(line, end_line));
                }
                return lines;
            }

            let newline = chars[end_line] == '\n';
            let word_end = if newline {
                end_line
            } else {
                end_of_word(&chars, end_line)
            };

            if newline || too_wide(line, word_end) {
                if end_line == line && !newline {
                    // Nothing fits yet: break inside the word, keeping at least one char.
                    let mut e = word_end;
                    while e > line + 1 && too_wide(line, e) {
                        e -= 1;
                    }
                    end_line = e;
                }
                push_line(&mut lines, slice(line, end_line));
                line = end_line;
                if newline {
                    line += 1;
                }
                break;
            }

            end_line = word_end;
        }
    }
}

fn push_line(lines: &mut Vec<String>, line: String) {
    log::trace!("wrap line {}: {:?}", lines.len(), line);
    lines.push(line);
}
