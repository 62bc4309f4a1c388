use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::schedule::{Rotation, ITEMS_PER_WEEK};

pub fn tabulate_rotation(rotation: &Rotation) -> Table {
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(30))
                    .with(HAlign::Left),
            )];
            for _ in 0..ITEMS_PER_WEEK {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(12)).with(HAlign::Left),
                ));
            }
            cols
        })
        .with_row({
            let mut header_cells = vec!["Week commencing".into()];
            for slot in 0..ITEMS_PER_WEEK {
                header_cells.push(format!("#{}", slot + 1).into());
            }
            Row::new(Styles::default().with(Header(true)), header_cells)
        });

    for week in rotation {
        let mut row_cells = vec![week.label.clone().into()];
        for slot in 0..ITEMS_PER_WEEK {
            row_cells.push(week.items.get(slot).cloned().unwrap_or_default().into());
        }
        table.push_row(Row::new(Styles::default(), row_cells));
    }

    table
}

pub fn tabulate_summary(items: usize, randomizer: u64, max_randomizer: u64) -> Table {
    let mut table = Table::default().with_cols(vec![
        Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Left)),
        Col::new(Styles::default().with(MinWidth(5)).with(HAlign::Right)),
    ]);
    for (label, value) in [
        ("Items", items as u64),
        ("Randomizer", randomizer),
        ("Max randomizer", max_randomizer),
    ] {
        table.push_row(Row::new(
            Styles::default(),
            vec![label.into(), value.to_string().into()],
        ));
    }
    table
}
