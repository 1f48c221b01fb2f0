//! Command-line interface for the wardrobe closet manager.
//!
//! Catalogs clothing photos, lists and searches the closet, composes
//! outfits, and runs the color-fit questionnaire from a terminal.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    cli::run()
}

// WASM builds drive the library from the host page instead of a terminal.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::env;
    use std::error::Error;
    use std::io::{self, BufRead, Write};
    use std::path::Path;
    use std::process::ExitCode;

    use wardrobe::closet::Closet;
    use wardrobe::color::Rgb;
    use wardrobe::composer::OutfitConstraints;
    use wardrobe::config::AppConfig;
    use wardrobe::intake;
    use wardrobe::model::GeneratedOutfit;
    use wardrobe::quiz;
    use wardrobe::store::{FileBackend, StorageBackend};
    use wardrobe::weather::WeatherCondition;

    pub fn run() -> ExitCode {
        let config = AppConfig::load_from_default_path().unwrap_or_default();

        env_logger::Builder::new()
            .filter_level(config.log_level.to_level_filter())
            .parse_default_env()
            .init();

        let args: Vec<String> = env::args().collect();
        if args.len() < 2 {
            usage(&args[0]);
            return ExitCode::FAILURE;
        }

        let backend = match open_backend(&config) {
            Ok(backend) => backend,
            Err(e) => {
                eprintln!("Error: could not open storage: {}", e);
                return ExitCode::FAILURE;
            }
        };
        let mut closet = Closet::open(backend);

        let result = match args[1].as_str() {
            "add" => cmd_add(&mut closet, &args[2..]),
            "list" => cmd_list(&closet, args.get(2).map(String::as_str)),
            "remove" => cmd_remove(&mut closet, args.get(2)),
            "wear" => cmd_wear(&mut closet, args.get(2)),
            "outfit" => cmd_outfit(&closet, &args[2..]),
            "outfits" => cmd_outfits(&closet),
            "save" => cmd_save(&mut closet, &args[2..]),
            "donate" => cmd_donate(&mut closet, args.get(2)),
            "restore" => cmd_restore(&mut closet, args.get(2)),
            "quiz" => cmd_quiz(),
            "clear" => cmd_clear(&mut closet),
            "help" | "--help" | "-h" => {
                usage(&args[0]);
                return ExitCode::SUCCESS;
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Use --help for usage information");
                return ExitCode::FAILURE;
            }
        };

        match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        }
    }

    fn open_backend(config: &AppConfig) -> Result<FileBackend, wardrobe::store::StoreError> {
        match &config.storage_dir {
            Some(dir) => FileBackend::new(dir.clone()),
            None => FileBackend::in_default_dir(),
        }
    }

    fn usage(program_name: &str) {
        eprintln!("Usage: {} <command> [args]", program_name);
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  add <image>...        Catalog clothing photos into the closet");
        eprintln!("  list [query]          List items, filtered by name or category");
        eprintln!("  remove <id>           Remove an item");
        eprintln!("  wear <id>             Record that an item was worn");
        eprintln!("  outfit [condition] [--palette <hex,hex,...>]");
        eprintln!("                        Compose an outfit; condition is one of");
        eprintln!("                        cold, temperate, hot, rainy");
        eprintln!("  outfits               List saved outfits");
        eprintln!("  save <name> <id>...   Save a named outfit from item ids");
        eprintln!("  donate <id>           Mark an item for donation");
        eprintln!("  restore <id>          Bring an item back from the donation pile");
        eprintln!("  quiz                  Run the color-fit questionnaire");
        eprintln!("  clear                 Remove every item from the closet");
        eprintln!("  help                  Show this help message");
    }

    fn cmd_add<B: StorageBackend>(
        closet: &mut Closet<B>,
        paths: &[String],
    ) -> Result<(), Box<dyn Error>> {
        if paths.is_empty() {
            return Err("add needs at least one image path".into());
        }
        for path in paths {
            let item = intake::intake_from_path(Path::new(path))?;
            println!(
                "Added {} [{}] {}  {}",
                item.name,
                item.category,
                color_column(&item),
                item.id
            );
            closet.add_item(item)?;
        }
        Ok(())
    }

    fn cmd_list<B: StorageBackend>(
        closet: &Closet<B>,
        query: Option<&str>,
    ) -> Result<(), Box<dyn Error>> {
        let matches = closet.search(query.unwrap_or(""));
        if matches.is_empty() {
            println!("No items");
            return Ok(());
        }
        let donated: Vec<&str> = closet
            .donation_items()
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        for item in matches {
            let marker = if donated.contains(&item.id.as_str()) {
                "  [donation]"
            } else {
                ""
            };
            println!(
                "{:<24} {:<12} {:<16} worn {:>3}  {}{}",
                item.name,
                item.category,
                color_column(item),
                item.times_worn,
                item.id,
                marker
            );
        }
        Ok(())
    }

    fn color_column(item: &wardrobe::model::ClothingItem) -> String {
        match item.secondary_color {
            Some(secondary) => format!("{}/{}", item.color, secondary),
            None => item.color.to_string(),
        }
    }

    fn cmd_remove<B: StorageBackend>(
        closet: &mut Closet<B>,
        id: Option<&String>,
    ) -> Result<(), Box<dyn Error>> {
        let id = id.ok_or("remove needs an item id")?;
        if closet.remove_item(id)? {
            println!("Removed {}", id);
        } else {
            eprintln!("No item with id {}", id);
        }
        Ok(())
    }

    fn cmd_wear<B: StorageBackend>(
        closet: &mut Closet<B>,
        id: Option<&String>,
    ) -> Result<(), Box<dyn Error>> {
        let id = id.ok_or("wear needs an item id")?;
        if closet.record_wear(id)? {
            let worn = closet.get(id).map(|item| item.times_worn).unwrap_or(0);
            println!("Worn {} time(s)", worn);
        } else {
            eprintln!("No item with id {}", id);
        }
        Ok(())
    }

    fn cmd_outfit<B: StorageBackend>(
        closet: &Closet<B>,
        args: &[String],
    ) -> Result<(), Box<dyn Error>> {
        let mut condition = None;
        let mut palette = Vec::new();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--palette" => {
                    let raw = args
                        .get(i + 1)
                        .ok_or("--palette needs a comma-separated color list")?;
                    for part in raw.split(',') {
                        palette.push(part.trim().parse::<Rgb>()?);
                    }
                    i += 1;
                }
                raw => {
                    condition = Some(parse_condition(raw)?);
                }
            }
            i += 1;
        }

        let mut constraints = match condition {
            Some(condition) => OutfitConstraints::for_condition(condition),
            None => OutfitConstraints::default(),
        };
        if !palette.is_empty() {
            constraints = constraints.with_palette(palette);
        }

        let outfit = closet.compose_outfit(&constraints, &mut rand::rng());
        print_outfit(closet, &outfit);
        Ok(())
    }

    fn parse_condition(raw: &str) -> Result<WeatherCondition, Box<dyn Error>> {
        WeatherCondition::all()
            .iter()
            .copied()
            .find(|condition| condition.name().eq_ignore_ascii_case(raw))
            .ok_or_else(|| format!("Unknown condition: {}", raw).into())
    }

    fn print_outfit<B: StorageBackend>(closet: &Closet<B>, outfit: &GeneratedOutfit) {
        if outfit.is_empty() {
            println!("Nothing to wear: the closet is empty");
            return;
        }
        println!("Outfit ({} items):", outfit.len());
        for id in &outfit.item_ids {
            match closet.get(id) {
                Some(item) => {
                    let slot = item.slot().map(|slot| slot.name()).unwrap_or("other");
                    println!("  {:<10} {} [{}]", slot, item.name, color_column(item));
                }
                None => println!("  (missing item {})", id),
            }
        }
        if !outfit.palette.is_empty() {
            let hexes: Vec<String> = outfit.palette.iter().map(Rgb::to_string).collect();
            println!("Palette: {}", hexes.join(" "));
        }
    }

    fn cmd_outfits<B: StorageBackend>(closet: &Closet<B>) -> Result<(), Box<dyn Error>> {
        if closet.outfits().is_empty() {
            println!("No saved outfits");
            return Ok(());
        }
        for outfit in closet.outfits() {
            let category = if outfit.category.is_empty() {
                "uncategorized"
            } else {
                &outfit.category
            };
            println!("{} [{}]  {}", outfit.name, category, outfit.id);
            for (member, id) in closet.resolve_outfit(outfit).iter().zip(&outfit.item_ids) {
                match member {
                    Some(item) => println!("  {}", item.name),
                    None => println!("  (missing item {})", id),
                }
            }
        }
        Ok(())
    }

    fn cmd_save<B: StorageBackend>(
        closet: &mut Closet<B>,
        args: &[String],
    ) -> Result<(), Box<dyn Error>> {
        let (name, ids) = args
            .split_first()
            .ok_or("save needs a name and at least one item id")?;
        match closet.save_outfit(name, "", ids.to_vec(), Vec::new())? {
            Some(id) => println!("Saved outfit {} as {}", name, id),
            None => eprintln!("An outfit needs a name and at least one item"),
        }
        Ok(())
    }

    fn cmd_donate<B: StorageBackend>(
        closet: &mut Closet<B>,
        id: Option<&String>,
    ) -> Result<(), Box<dyn Error>> {
        let id = id.ok_or("donate needs an item id")?;
        if closet.mark_for_donation(id)? {
            println!("Marked {} for donation", id);
        } else {
            eprintln!("No item with id {}", id);
        }
        Ok(())
    }

    fn cmd_restore<B: StorageBackend>(
        closet: &mut Closet<B>,
        id: Option<&String>,
    ) -> Result<(), Box<dyn Error>> {
        let id = id.ok_or("restore needs an item id")?;
        if closet.restore(id)? {
            println!("Restored {}", id);
        } else {
            eprintln!("{} is not in the donation pile", id);
        }
        Ok(())
    }

    fn cmd_quiz() -> Result<(), Box<dyn Error>> {
        let stdin = io::stdin();
        let mut answers = Vec::new();

        for question in quiz::questions() {
            println!();
            println!("{}", question.prompt);
            for (i, option) in question.options.iter().enumerate() {
                println!("  {}) {}", i + 1, option);
            }

            let choice = loop {
                print!("> ");
                io::stdout().flush()?;
                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    eprintln!("No answer given; quiz abandoned");
                    return Ok(());
                }
                match line.trim().parse::<usize>() {
                    Ok(n) if (1..=question.options.len()).contains(&n) => break n - 1,
                    _ => eprintln!("Enter a number between 1 and {}", question.options.len()),
                }
            };
            answers.push(question.options[choice]);
        }

        match quiz::evaluate(&answers) {
            Some(profile) => {
                println!();
                println!("Season: {}", profile.season.name());
                println!("{}", profile.description);
                let hexes: Vec<String> = profile.palette.iter().map(Rgb::to_string).collect();
                println!("Palette: {}", hexes.join(" "));
            }
            None => eprintln!("Not enough answers to score the quiz"),
        }
        Ok(())
    }

    fn cmd_clear<B: StorageBackend>(closet: &mut Closet<B>) -> Result<(), Box<dyn Error>> {
        closet.clear()?;
        println!("Closet cleared");
        Ok(())
    }
}
