use anyhow::Result;
use tracing::info;

use crate::database::entities::{member_types, posts, profiles, users};
use crate::database::store::Store;

/// Member types every deployment starts with.
pub fn default_member_types() -> Vec<member_types::Model> {
    vec![
        member_types::Model {
            id: "basic".to_string(),
            discount: 0,
            month_posts_limit: 20,
        },
        member_types::Model {
            id: "business".to_string(),
            discount: 5,
            month_posts_limit: 100,
        },
    ]
}

pub async fn seed_member_types(store: &Store) -> Result<()> {
    if !store.member_types.is_empty().await {
        info!("Member types already present, skipping seed");
        return Ok(());
    }

    for member_type in default_member_types() {
        info!("Seeding member type '{}'", member_type.id);
        store.member_types.insert(member_type).await?;
    }

    Ok(())
}

/// Demo users with a profile each and a couple of posts. Returns the created users.
pub async fn create_example_data(store: &Store) -> Result<Vec<users::Model>> {
    if !store.users.is_empty().await {
        info!("Users already present, skipping example data");
        return Ok(Vec::new());
    }

    info!("Creating example users");

    let people = [
        ("Alice", "Liddell", "alice@example.com", "basic", "UK", "Oxford"),
        ("Bob", "Dylan", "bob@example.com", "business", "US", "Duluth"),
        ("Carol", "Danvers", "carol@example.com", "gold", "US", "Boston"),
    ];

    let mut created = Vec::new();
    for (first_name, last_name, email, member_type_id, country, city) in people {
        let user = store
            .users
            .create(users::CreateModel {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
            })
            .await;

        store
            .profiles
            .create(profiles::CreateModel {
                avatar: format!("https://example.com/avatars/{}.png", first_name.to_lowercase()),
                sex: "unspecified".to_string(),
                birthday: 1990,
                country: country.to_string(),
                street: "High Street".to_string(),
                city: city.to_string(),
                member_type_id: member_type_id.to_string(),
                user_id: user.id.clone(),
            })
            .await;

        store
            .posts
            .create(posts::CreateModel {
                title: format!("Hello from {}", first_name),
                content: format!("{} {} joined the network.", first_name, last_name),
                user_id: user.id.clone(),
            })
            .await;

        created.push(user);
    }

    info!("Created {} example users", created.len());
    Ok(created)
}
