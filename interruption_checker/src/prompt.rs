/// One keystroke's worth of menu input. Menus are numbered from 1; `Pick`
/// carries the zero-based index into the listed options.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuChoice {
    Quit,
    Clear,
    Pick(usize),
    Invalid,
}

pub fn parse_menu_choice(input: &str, option_count: usize) -> MenuChoice {
    let input = input.trim();
    if input.is_empty() {
        return MenuChoice::Clear;
    }
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return MenuChoice::Quit;
    }
    match input.parse::<usize>() {
        Ok(number) if (1..=option_count).contains(&number) => MenuChoice::Pick(number - 1),
        _ => MenuChoice::Invalid,
    }
}
