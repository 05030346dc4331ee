use anyhow::Context;
use interruption_checker::prompt::{parse_menu_choice, MenuChoice};
use interruption_checker::render;
use notice_view::view::FilteredNoticeView;
use std::io::Write;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::config_telemetry();
    start().await
}

enum AfterBarangayMenu {
    ChangeCity,
    Quit,
}

async fn start() -> anyhow::Result<()> {
    println!("ZANECO SCHEDULED POWER INTERRUPTION CHECKER");
    println!("Loading schedules...");

    let mut view = FilteredNoticeView::new();
    view.initialize().await;

    if view.cities().is_empty() {
        println!("No locations are available right now, please try again later.");
        return Ok(());
    }

    loop {
        print_city_menu(&view);
        let input = match read_line()? {
            Some(input) => input,
            None => return Ok(()),
        };
        match parse_menu_choice(&input, view.cities().len()) {
            MenuChoice::Quit => return Ok(()),
            MenuChoice::Clear => {
                view.select_city(None);
                continue;
            }
            MenuChoice::Invalid => {
                println!("Pick a number from the list, or q to quit.");
                continue;
            }
            MenuChoice::Pick(index) => {
                let code = view.cities()[index].code.clone();
                view.select_city(Some(code));
            }
        }
        if let AfterBarangayMenu::Quit = check_barangays(&mut view)? {
            return Ok(());
        }
    }
}

/// The inner menu: keeps offering the selected city's barangays so several
/// can be checked in a row. Blank input goes back to the city menu.
fn check_barangays(view: &mut FilteredNoticeView) -> anyhow::Result<AfterBarangayMenu> {
    loop {
        if view.available_barangays().is_empty() {
            println!(
                "No barangays are listed for {}.",
                view.selected_city_name().unwrap_or("this city")
            );
            return Ok(AfterBarangayMenu::ChangeCity);
        }
        print_barangay_menu(view);
        let input = match read_line()? {
            Some(input) => input,
            None => return Ok(AfterBarangayMenu::Quit),
        };
        match parse_menu_choice(&input, view.available_barangays().len()) {
            MenuChoice::Quit => return Ok(AfterBarangayMenu::Quit),
            MenuChoice::Clear => return Ok(AfterBarangayMenu::ChangeCity),
            MenuChoice::Invalid => {
                println!("Pick a number from the list, blank to change city, or q to quit.");
            }
            MenuChoice::Pick(index) => {
                let code = view.available_barangays()[index].code.clone();
                if let Err(error) = view.select_barangay(Some(code)) {
                    println!("{error}");
                    continue;
                }
                println!();
                println!("{}", render::selection_report(&view.visible_notices()));
            }
        }
    }
}

fn print_city_menu(view: &FilteredNoticeView) {
    println!();
    println!("City/Municipality:");
    for (index, city) in view.cities().iter().enumerate() {
        println!("  {}. {}", index + 1, city.name);
    }
    print!("Enter a number to pick, or q to quit: ");
    let _ = std::io::stdout().flush();
}

fn print_barangay_menu(view: &FilteredNoticeView) {
    println!();
    println!("Barangay of {}:", view.selected_city_name().unwrap_or("-"));
    for (index, barangay) in view.available_barangays().iter().enumerate() {
        println!("  {}. {}", index + 1, barangay.name);
    }
    print!("Enter a number to pick, blank to change city, or q to quit: ");
    let _ = std::io::stdout().flush();
}

/// `None` means stdin was closed.
fn read_line() -> anyhow::Result<Option<String>> {
    let mut input = String::new();
    let bytes = std::io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input))
}
