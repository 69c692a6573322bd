//! The fixed answer catalog.
//!
//! Keeping the list in code ensures the daily rotation can only change via a
//! reviewed commit, and every device ships the identical ordering.

/// A single candidate answer: a book title and its author.
///
/// Identity is positional: an entry is "the same book" across devices because
/// it sits at the same index of [`CATALOG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: &'static str,
    pub author: &'static str,
}

const fn book(title: &'static str, author: &'static str) -> CatalogEntry {
    CatalogEntry { title, author }
}

/// The fixed, ordered list of daily answers. Append-only; reordering or
/// removing entries would shift every future day's puzzle.
pub const CATALOG: [CatalogEntry; 30] = [
    book("My Brilliant Friend", "Elena Ferrante"),
    book("Anna Karenina", "Leo Tolstoy"),
    book("Crying in H Mart", "Michelle Zauner"),
    book("Pride and Prejudice", "Jane Austen"),
    book("A Room of One's Own", "Virginia Woolf"),
    book("Atonement", "Ian McEwan"),
    book("The English Patient", "Michael Ondaatje"),
    book("One Hundred Years of Solitude", "Gabriel Garcia Marquez"),
    book("Romance of the Three Kingdoms", "Luo Guanzhong"),
    book("A Tree Grows in Brooklyn", "Betty Smith"),
    book("Normal People", "Sally Rooney"),
    book("The Namesake", "Jhumpa Lahiri"),
    book("Americanah", "Chimamanda Ngozi Adichie"),
    book("The Vanishing Half", "Brit Bennett"),
    book("Sula", "Toni Morrison"),
    book("Convenience Store Woman", "Sayaka Murata"),
    book("The Great Gatsby", "F. Scott Fitzgerald"),
    book("A Portrait of the Artist as a Young Man", "James Joyce"),
    book("Charlotte's Web", "E.B. White"),
    book("The Odyssey", "Homer"),
    book("All Fours", "Miranda July"),
    book("Yellowface", "R.F. Kuang"),
    book("Crime and Punishment", "Fyodor Dostoevsky"),
    book("The Anthropocene Reviewed", "John Green"),
    book("The Goldfinch", "Donna Tartt"),
    book("Maximum Ride", "James Patterson"),
    book("Twilight", "Stephenie Meyer"),
    book("The Hunger Games", "Suzanne Collins"),
    book("Small Things Like These", "Claire Keegan"),
    book("The Unbearable Lightness of Being", "Milan Kundera"),
];
