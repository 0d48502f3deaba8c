use nu_ansi_term::Color;

use pangram::is_pangram;

const EXAMPLE: &str = "The quick brown fox jumps over the lazy dog";

fn main() {
    let result = is_pangram(EXAMPLE);

    let color = match result {
        true => Color::Green,
        _ => Color::Red,
    };

    println!("{}", color.paint(result.to_string()));
}
