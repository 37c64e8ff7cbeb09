mod cli;

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use nimbus_chat::{
    ChatSession, EndpointConfig, HttpAgentClient, Message, MessageKind,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("nimbus_chat=warn");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "nimbus_chat=warn".parse().unwrap()),
            ),
        )
        .init();

    // Resolve the backend: flags, then env, then the AWS default
    let config = match EndpointConfig::resolve(args.provider, args.endpoint.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("nimbus: {e}");
            std::process::exit(2);
        }
    };
    tracing::info!(
        "Nimbus v{} → {} agent at {}",
        env!("CARGO_PKG_VERSION"),
        config.provider,
        config.base_url
    );

    let client = HttpAgentClient::new(config);
    let mut session = ChatSession::new(client.config());

    print_welcome(client.config());
    run_repl(&mut session, &client).await;
}

async fn run_repl(session: &mut ChatSession, client: &HttpAgentClient) {
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("nimbus: stdin read failed: {e}");
                break;
            }
        }

        match line.trim() {
            "" => continue,
            "/quit" | "/exit" => break,
            "/clear" => {
                session.reset();
                println!("대화를 초기화했습니다.\n");
            }
            "/health" => print_health(client).await,
            text => {
                if let Some(message) = session.send(client, text).await {
                    render(message);
                }
            }
        }
    }
}

fn print_welcome(config: &EndpointConfig) {
    println!("안녕하세요! 👋");
    println!("{} AI Agent에 오신 것을 환영합니다.", config.provider);
    println!("{}\n", config.provider.tagline());
    println!("다음과 같은 질문을 해보세요:");
    for query in config.provider.example_queries() {
        println!("  \"{query}\"");
    }
    println!("\n명령어: /clear (초기화), /health (백엔드 상태), /quit (종료)\n");
}

/// Render one transcript entry the way the demo pages do: a kind header
/// with the capture time, the text, then the tool marker and citations.
fn render(message: &Message) {
    let header = match message.kind {
        MessageKind::User => "👤 사용자",
        MessageKind::Agent => "🤖 에이전트",
        MessageKind::Error => "❌ 오류",
    };
    println!("\n{header}  [{}]", message.timestamp);
    println!("{}", message.content);

    if let Some(tool) = &message.tool_used {
        println!("🔧 사용된 도구: {tool}");
    }
    if !message.citations.is_empty() {
        println!("📚 참고 출처:");
        for citation in &message.citations {
            println!("  - {citation}");
        }
    }
    println!();
}

async fn print_health(client: &HttpAgentClient) {
    match client.health().await {
        Ok(health) => println!("{} — {}\n", health.status, health.service),
        Err(e) => println!("백엔드에 연결할 수 없습니다 ({e})\n"),
    }
}
