use std::fs;
use std::path::{Path, PathBuf};

use draftlink_core::{
    BuildOptions, MasterTableBuilder, write_master_csv, write_master_csv_file,
    write_unmatched_csv_file,
};
use draftlink_ingest::{load_alias_table, load_draft_pool, load_stat_table, load_team_directory};
use draftlink_map::{AliasTable, TeamDirectory};
use draftlink_model::{DraftPool, DraftRecord, StatRecord, StatTable};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

struct Fixture {
    _dir: TempDir,
    stats: StatTable,
    pool: DraftPool,
    aliases: AliasTable,
    teams: TeamDirectory,
}

fn fixture() -> Fixture {
    let dir = TempDir::new().expect("temp dir");
    let stats = write(
        dir.path(),
        "batting_combined_all.csv",
        "name,team,year,ab\n\
         John Smith,OSU,2020,200\n\
         Sam Lee,SC,2018,150\n\
         Mike Jones,OSU,2019,90\n\
         No Year,OSU,,12\n",
    );
    let drafts = write(
        dir.path(),
        "all_drafts.json",
        r#"[
            {"Player Name": "Jon Smith", "Drafted From": "Ohio State Univ.", "Year": 2020, "Round": 3, "Pick": 90, "Drafted By": "Reds"},
            {"Player Name": "Sam Lee", "Drafted From": "State University", "Year": 2018, "Round": 5, "Pick": 150, "Drafted By": "Cubs"},
            {"Player Name": "Mike Jones", "Drafted From": "Ohio State University", "Year": 2020, "Round": 1, "Pick": 10, "Drafted By": "Mets"}
        ]"#,
    );
    let aliases = write(
        dir.path(),
        "missing_schools.csv",
        "Old name,New name\nState College,State University\n",
    );
    let teams = write(
        dir.path(),
        "unique_teams.csv",
        "Acronym,Full Name\nOSU,Ohio State University\nSC,State College\n",
    );

    Fixture {
        stats: load_stat_table(&stats).expect("stats").data,
        pool: load_draft_pool(&drafts).expect("drafts").data,
        aliases: load_alias_table(&aliases).expect("aliases").data,
        teams: load_team_directory(&teams, None).expect("teams").data,
        _dir: dir,
    }
}

#[test]
fn builds_one_row_per_input_row() {
    let fx = fixture();
    let table = MasterTableBuilder::new(&fx.pool, &fx.aliases)
        .with_teams(&fx.teams)
        .build(&fx.stats);

    assert_eq!(table.len(), fx.stats.len());
    let report = table.report();
    assert_eq!(report.total, 4);
    assert_eq!(report.matched, 2);
    assert_eq!(report.missing_year, 1);
    assert_eq!(report.unmatched_rows, vec![2, 3]);

    let first = &table.rows[0].draft;
    assert_eq!((first.round, first.pick), (Some(3), Some(90)));
    assert!(!table.rows[2].draft.drafted, "2019 row must not match a 2020 pick");
}

#[test]
fn renders_master_csv() {
    let fx = fixture();
    let table = MasterTableBuilder::new(&fx.pool, &fx.aliases)
        .with_teams(&fx.teams)
        .build(&fx.stats);

    let mut buffer = Vec::new();
    write_master_csv(&table, &mut buffer).expect("write csv");
    let rendered = String::from_utf8(buffer).expect("utf8");

    insta::assert_snapshot!(rendered, @r"
    name,team,year,ab,Full Team Name,Round,Pick,Drafted By,Drafted From,Drafted?
    John Smith,OSU,2020,200,ohio state university,3,90,Reds,Ohio State Univ.,True
    Sam Lee,SC,2018,150,state college,5,150,Cubs,State University,True
    Mike Jones,OSU,2019,90,ohio state university,,,,,False
    No Year,OSU,,12,ohio state university,,,,,False
    ");
}

#[test]
fn rebuilding_an_output_overwrites_derived_columns() {
    let fx = fixture();
    let first = MasterTableBuilder::new(&fx.pool, &fx.aliases)
        .with_teams(&fx.teams)
        .build(&fx.stats);
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("batting_draft.csv");
    write_master_csv_file(&first, &path).expect("write first pass");
    let first_rendered = fs::read_to_string(&path).expect("read first pass");

    let reloaded = load_stat_table(&path).expect("reload").data;
    let second = MasterTableBuilder::new(&fx.pool, &fx.aliases)
        .with_teams(&fx.teams)
        .build(&reloaded);
    let mut buffer = Vec::new();
    write_master_csv(&second, &mut buffer).expect("write second pass");
    let second_rendered = String::from_utf8(buffer).expect("utf8");

    let header = second_rendered.lines().next().expect("header");
    assert_eq!(header.matches("Drafted?").count(), 1);
    assert_eq!(header.matches("Full Team Name").count(), 1);
    assert_eq!(second_rendered, first_rendered);
}

#[test]
fn stale_draft_columns_are_replaced() {
    let stats = StatTable {
        headers: vec![
            "name".to_string(),
            "Round".to_string(),
            "team".to_string(),
            "year".to_string(),
            "Drafted?".to_string(),
        ],
        records: vec![StatRecord {
            name: Some("Derek Lowe".to_string()),
            team: Some("Ohio State University".to_string()),
            year: Some(2020),
            cells: vec![
                "Derek Lowe".to_string(),
                "7".to_string(),
                "Ohio State University".to_string(),
                "2020".to_string(),
                "True".to_string(),
            ],
        }],
    };
    let pool = DraftPool::new(Vec::new());
    let aliases = AliasTable::new();
    let table = MasterTableBuilder::new(&pool, &aliases).build(&stats);

    let mut buffer = Vec::new();
    write_master_csv(&table, &mut buffer).expect("write csv");
    let rendered = String::from_utf8(buffer).expect("utf8");
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines,
        vec![
            "name,Round,team,year,Drafted?,Pick,Drafted By,Drafted From",
            "Derek Lowe,,Ohio State University,2020,False,,,",
        ]
    );
}

#[test]
fn without_team_directory_there_is_no_team_column() {
    let fx = fixture();
    let table = MasterTableBuilder::new(&fx.pool, &fx.aliases).build(&fx.stats);

    let mut buffer = Vec::new();
    write_master_csv(&table, &mut buffer).expect("write csv");
    let rendered = String::from_utf8(buffer).expect("utf8");
    let header = rendered.lines().next().expect("header");
    assert_eq!(header, "name,team,year,ab,Round,Pick,Drafted By,Drafted From,Drafted?");
    // Bare acronyms do not resolve to a school without the directory.
    assert_eq!(table.report().matched, 0);
}

#[test]
fn parallel_build_matches_sequential() {
    let fx = fixture();
    let sequential = MasterTableBuilder::new(&fx.pool, &fx.aliases)
        .with_teams(&fx.teams)
        .build(&fx.stats);
    let parallel = MasterTableBuilder::new(&fx.pool, &fx.aliases)
        .with_teams(&fx.teams)
        .with_options(BuildOptions {
            parallel: std::num::NonZeroUsize::new(3),
            ..BuildOptions::default()
        })
        .build(&fx.stats);
    assert_eq!(parallel.rows, sequential.rows);
}

#[test]
fn writes_unmatched_rows_for_review() {
    let fx = fixture();
    let table = MasterTableBuilder::new(&fx.pool, &fx.aliases)
        .with_teams(&fx.teams)
        .build(&fx.stats);

    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("unmatched.csv");
    let written = write_unmatched_csv_file(&table, &path).expect("write unmatched");
    assert_eq!(written, 2);
    let contents = fs::read_to_string(&path).expect("read back");
    assert!(contents.starts_with("name,team,year,ab\n"));
    assert!(contents.contains("Mike Jones"));
    assert!(!contents.contains("John Smith"));
}

#[test]
fn inputs_are_left_untouched() {
    let stats = StatTable {
        headers: vec!["name".to_string(), "team".to_string(), "year".to_string()],
        records: vec![StatRecord {
            name: Some("Sam Lee".to_string()),
            team: Some("State College".to_string()),
            year: Some(2018),
            cells: vec![
                "Sam Lee".to_string(),
                "State College".to_string(),
                "2018".to_string(),
            ],
        }],
    };
    let pool = DraftPool::new(vec![DraftRecord {
        player_name: "sam lee".to_string(),
        drafted_from: "state university".to_string(),
        year: 2018,
        round: 5,
        pick: 150,
        drafted_by: "Cubs".to_string(),
    }]);
    let aliases = AliasTable::from_pairs([("state college", "state university")]);
    let before = stats.clone();

    let table = MasterTableBuilder::new(&pool, &aliases).build(&stats);
    assert!(table.rows[0].draft.drafted);
    assert_eq!(stats.records, before.records);
    assert_eq!(pool.records()[0].player_name, "sam lee");
}
