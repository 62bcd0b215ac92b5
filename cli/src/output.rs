use colored::Colorize;
use nk_core::Note;

pub fn header(title: &str) {
    println!("{}", title.bold().underline());
}

pub fn hint(msg: &str) {
    println!("{} {}", "hint:".cyan().bold(), msg.dimmed());
}

pub fn success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

pub fn note(note: &Note) {
    println!("  {}  {}", note.title.bold(), format!("[{}]", note.id).dimmed());
    if !note.content.is_empty() {
        for line in note.content.lines() {
            println!("    {line}");
        }
    }
}

pub fn collection(notes: &[Note]) {
    if notes.is_empty() {
        println!("{}", "No notes yet. Create your first note!".dimmed());
        hint("notekeep add <title> <content>");
        return;
    }
    for n in notes {
        note(n);
    }
}
