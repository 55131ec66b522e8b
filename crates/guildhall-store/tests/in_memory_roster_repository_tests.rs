//! Integration tests for `InMemoryRosterRepository`.

use std::sync::Arc;

use guildhall_core::character::Character;
use guildhall_core::race::Race;
use guildhall_core::repository::RosterRepository;
use guildhall_store::InMemoryRosterRepository;
use guildhall_test_support::{fellowship_guild, guild};

fn character(id: u32, name: &str) -> Character {
    Character {
        id,
        name: name.to_owned(),
        level: 1,
        race: Race::Elf,
        hp: 10,
        damage: None,
        guild: fellowship_guild(),
    }
}

// --- empty store ---

#[tokio::test]
async fn test_new_repository_is_empty() {
    let repo = InMemoryRosterRepository::new();

    assert!(repo.guilds().await.unwrap().is_empty());
    assert!(repo.characters().await.unwrap().is_empty());
    assert!(repo.find_guild(1).await.unwrap().is_none());
}

// --- guilds ---

#[tokio::test]
async fn test_append_guild_returns_full_collection() {
    let repo = InMemoryRosterRepository::new();

    let first = repo.append_guild(guild(1, "Fellowship")).await.unwrap();
    let second = repo.append_guild(guild(2, "Rohirrim")).await.unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 2);
    assert_eq!(second[1].name, "Rohirrim");
}

#[tokio::test]
async fn test_find_guild_returns_first_match() {
    let repo = InMemoryRosterRepository::new();
    repo.append_guild(guild(5, "Early")).await.unwrap();
    repo.append_guild(guild(5, "Late")).await.unwrap();

    let found = repo.find_guild(5).await.unwrap().unwrap();

    assert_eq!(found.name, "Early");
}

// --- characters ---

#[tokio::test]
async fn test_append_character_preserves_insertion_order() {
    let repo = InMemoryRosterRepository::new();

    repo.append_character(character(10, "Legolas")).await.unwrap();
    let appended = repo.append_character(character(3, "Arwen")).await.unwrap();

    let names: Vec<&str> = appended.characters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Legolas", "Arwen"]);
}

#[tokio::test]
async fn test_append_character_flags_id_collision() {
    let repo = InMemoryRosterRepository::new();

    let first = repo.append_character(character(42, "Haldir")).await.unwrap();
    let other = repo.append_character(character(43, "Elrond")).await.unwrap();
    let repeat = repo.append_character(character(42, "Glorfindel")).await.unwrap();

    assert!(!first.id_collision);
    assert!(!other.id_collision);
    assert!(repeat.id_collision);
    assert_eq!(repeat.characters.len(), 3);
}

#[tokio::test]
async fn test_snapshot_is_detached_from_later_appends() {
    let repo = InMemoryRosterRepository::new();
    repo.append_guild(guild(1, "Fellowship")).await.unwrap();

    let snapshot = repo.guilds().await.unwrap();
    repo.append_guild(guild(2, "Rohirrim")).await.unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(repo.guilds().await.unwrap().len(), 2);
}

// --- concurrency ---

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_are_all_recorded() {
    let repo = Arc::new(InMemoryRosterRepository::new());

    let mut handles = Vec::new();
    for i in 0..64_i64 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.append_guild(guild(i, "Concurrent")).await.unwrap();
            let id = u32::try_from(i).unwrap();
            repo.append_character(character(id, "Runner")).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let mut guild_ids: Vec<i64> = repo.guilds().await.unwrap().iter().map(|g| g.id).collect();
    guild_ids.sort_unstable();
    assert_eq!(guild_ids, (0..64).collect::<Vec<_>>());
    assert_eq!(repo.characters().await.unwrap().len(), 64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_ids_report_all_but_one_collision() {
    let repo = Arc::new(InMemoryRosterRepository::new());

    let mut handles = Vec::new();
    for _ in 0..32 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.append_character(character(7, "Twin"))
                .await
                .unwrap()
                .id_collision
        }));
    }
    let mut collisions = 0;
    for handle in handles {
        if handle.await.unwrap() {
            collisions += 1;
        }
    }

    assert_eq!(collisions, 31);
    assert_eq!(repo.characters().await.unwrap().len(), 32);
}
