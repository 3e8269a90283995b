use signlearn_quiz_lib::settings::Settings;
use signlearn_quiz_lib::database::DatabaseManager;

#[tokio::main]
async fn main() {
    println!("🔧 Testing database connection...");

    // Load .env file
    dotenvy::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            println!("❌ Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let db = &settings.database;
    println!("📊 Database Configuration:");
    println!("  DB_HOST: {}", db.host);
    println!("  DB_PORT: {}", db.port);
    println!("  DB_NAME: {}", db.name);
    println!("  DB_USER: {}", db.user);
    println!("  DB_PASSWORD: {}", if db.password.is_empty() { "<empty>" } else { "***set***" });

    println!("\n🔗 Testing PostgreSQL connection...");
    let manager = match DatabaseManager::new(db).await {
        Ok(manager) => {
            println!("✅ PostgreSQL connection successful");
            manager
        }
        Err(e) => {
            println!("❌ PostgreSQL connection failed: {}", e);
            println!("\n💡 Possible solutions:");
            println!("  1. Check if PostgreSQL is running");
            println!("  2. Verify database '{}' exists", db.name);
            println!("  3. Verify user '{}' exists with correct password", db.user);
            std::process::exit(1);
        }
    };

    for table in ["quiz", "glosses"] {
        println!("🔍 Checking if {} table exists...", table);
        match manager.count_rows(table).await {
            Ok(count) => println!("✅ {} table exists with {} records", table, count),
            Err(e) => println!("❌ {} table query failed: {}", table, e),
        }
    }

    println!("\n✅ Database connection test completed!");
}
