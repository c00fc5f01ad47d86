use crate::config::EngineConfig;
use crate::core::board::Game;
use crate::engine::perft::perft_divide;
use crate::engine::search::{format_bestmove, format_info, Searcher, MAX_DEPTH};
use crate::error::{EngineError, EngineResult, ErrorKind};
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tracing::{debug, info, warn};
use vampirc_uci::uci::{UciSearchControl, UciTimeControl};
use vampirc_uci::{parser, UciMessage};

/// GUI options accepted by the UCI standard that this engine does not provide
const UNSUPPORTED_OPTIONS: [&str; 5] = ["hash", "threads", "multipv", "ponder", "ownbook"];

pub struct UCI {
    pub game: Game,
    searcher: Searcher,
    config: EngineConfig,
}

impl UCI {
    pub fn new(config: EngineConfig) -> Self {
        UCI {
            game: Game::new(),
            searcher: Searcher::new(config.rng_seed()),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read commands from stdin until `quit` or end of input
    pub fn run(&mut self) -> EngineResult<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = line?;
            let keep_going = self.handle_line(&line, &mut stdout)?;
            stdout.flush()?;
            if !keep_going {
                break;
            }
        }
        info!("uci session finished");
        Ok(())
    }

    /// Handle one command line. Returns `false` once the session should end.
    ///
    /// Failures of the command itself are reported to the GUI as `info string`
    /// lines; only output failures are returned.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> EngineResult<bool> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(true);
        }

        match self.dispatch(line, out) {
            Ok(keep_going) => Ok(keep_going),
            Err(err) if matches!(err.kind(), ErrorKind::UnrecognizedFault(_)) => Err(err),
            Err(err) => {
                warn!(%err, command = line, "command failed");
                writeln!(out, "info string error: {}", err.kind())?;
                Ok(true)
            }
        }
    }

    fn dispatch<W: Write>(&mut self, line: &str, out: &mut W) -> EngineResult<bool> {
        debug!(command = line, "received");
        match parser::parse_one(line) {
            UciMessage::Uci => self.cmd_uci(out)?,
            UciMessage::IsReady => writeln!(out, "readyok")?,
            UciMessage::SetOption { name, value } => {
                self.apply_setoption(name.trim(), value.as_deref())?;
            }
            UciMessage::UciNewGame => self.cmd_ucinewgame(),
            UciMessage::Position { startpos, fen, moves } => {
                let fen_str = fen.as_ref().map(|f| f.as_str());
                let move_strs: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                self.apply_position(startpos, fen_str, &move_strs)?;
            }
            UciMessage::Go {
                time_control,
                search_control,
            } => self.cmd_go(time_control.as_ref(), search_control.as_ref(), out)?,
            UciMessage::Stop => debug!("stop ignored: search is synchronous"),
            UciMessage::Quit => return Ok(false),
            UciMessage::Unknown(ref s, _) => {
                let parts: Vec<&str> = s.split_whitespace().collect();
                match parts.first().copied() {
                    Some("d") | Some("display") => self.cmd_display(out)?,
                    Some("perft") => self.cmd_perft(&parts, out)?,
                    Some(cmd @ ("position" | "go" | "setoption")) => {
                        return Err(EngineError::invalid_parameter(format!("malformed {} command", cmd)));
                    }
                    _ => {
                        return Err(EngineError::invalid_parameter(format!("unknown command '{}'", s.trim())));
                    }
                }
            }
            other => debug!(?other, "ignored"),
        }
        Ok(true)
    }

    fn cmd_uci<W: Write>(&self, out: &mut W) -> EngineResult<()> {
        writeln!(out, "id name pawnstorm {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "id author the pawnstorm developers")?;
        writeln!(out)?;
        writeln!(out, "option name Depth type spin default {} min 0 max {}", self.config.max_ply, MAX_DEPTH)?;
        writeln!(out, "option name AlphaBeta type check default {}", self.config.alpha_beta)?;
        writeln!(out, "option name Seed type string default")?;
        writeln!(out, "uciok")?;
        Ok(())
    }

    fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> EngineResult<()> {
        let opt = name.to_lowercase().replace([' ', '_'], "");
        let value = value.unwrap_or("").trim();
        match opt.as_str() {
            "depth" => {
                let depth = value
                    .parse::<u32>()
                    .ok()
                    .filter(|d| *d <= MAX_DEPTH)
                    .ok_or_else(|| {
                        EngineError::invalid_parameter(format!("Depth must be 0..={}, got '{}'", MAX_DEPTH, value))
                    })?;
                self.config.max_ply = depth;
            }
            "alphabeta" => {
                self.config.alpha_beta = match value.to_ascii_lowercase().as_str() {
                    "true" | "1" => true,
                    "false" | "0" => false,
                    _ => {
                        return Err(EngineError::invalid_parameter(format!(
                            "AlphaBeta must be true or false, got '{}'",
                            value
                        )));
                    }
                };
            }
            "seed" => {
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| EngineError::invalid_parameter(format!("Seed must be an integer, got '{}'", value)))?;
                self.config.seed = Some(seed);
                self.searcher.reseed(seed);
            }
            o if UNSUPPORTED_OPTIONS.contains(&o) => {
                return Err(EngineError::unimplemented(format!("option {}", name)));
            }
            _ => return Err(EngineError::invalid_parameter(format!("unknown option '{}'", name))),
        }
        info!(option = name, value, "option set");
        Ok(())
    }

    pub fn cmd_ucinewgame(&mut self) {
        self.game = Game::new();
    }

    /// Set up a position and replay `moves` on it. The current game is kept when any step fails.
    fn apply_position(&mut self, startpos: bool, fen: Option<&str>, moves: &[String]) -> EngineResult<()> {
        let mut game = match fen {
            Some(fen_str) if !startpos => Game::from_fen(fen_str)?,
            _ => Game::new(),
        };
        for s in moves {
            let mv = game.parse_move(s)?;
            game.play(mv)?;
        }
        self.game = game;
        Ok(())
    }

    fn cmd_go<W: Write>(
        &mut self,
        time_control: Option<&UciTimeControl>,
        search_control: Option<&UciSearchControl>,
        out: &mut W,
    ) -> EngineResult<()> {
        let mut limits = self.config.limits();
        if let Some(depth) = search_control.and_then(|sc| sc.depth) {
            let depth = u32::from(depth);
            if depth > MAX_DEPTH {
                return Err(EngineError::invalid_parameter(format!(
                    "go depth must be 0..={}, got {}",
                    MAX_DEPTH, depth
                )));
            }
            limits.max_ply = depth.saturating_sub(1);
        }
        if let Some(tc) = time_control {
            warn!(?tc, "time control ignored; searching to fixed depth");
        }

        let side = self.game.side_to_move;
        let result = self.searcher.search(&mut self.game, &limits)?;
        writeln!(
            out,
            "{}",
            format_info(&limits, self.searcher.stats(), self.searcher.elapsed(), side, &result)
        )?;
        writeln!(out, "{}", format_bestmove(side, &result))?;
        Ok(())
    }

    fn cmd_display<W: Write>(&self, out: &mut W) -> EngineResult<()> {
        writeln!(out)?;
        write!(out, "{}", self.game)?;
        writeln!(out, "Side to move: {}", self.game.side_to_move.name())?;
        Ok(())
    }

    fn cmd_perft<W: Write>(&mut self, parts: &[&str], out: &mut W) -> EngineResult<()> {
        let depth: u32 = match parts.get(1) {
            Some(s) => s
                .parse()
                .map_err(|_| EngineError::invalid_parameter(format!("perft depth '{}'", s)))?,
            None => 1,
        };
        let side = self.game.side_to_move;
        let start = Instant::now();
        let divide = perft_divide(&mut self.game, side, depth)?;
        // perft 0 counts the position itself
        let nodes: u64 = if depth == 0 { 1 } else { divide.iter().map(|(_, n)| n).sum() };
        let elapsed = start.elapsed();
        for (mv, n) in &divide {
            writeln!(out, "{}: {}", mv.to_uci(side), n)?;
        }
        let nps = if elapsed.as_millis() > 0 {
            nodes as u128 * 1000 / elapsed.as_millis()
        } else {
            0
        };
        writeln!(out, "Nodes: {} ({} ms, {} nps)", nodes, elapsed.as_millis(), nps)?;
        Ok(())
    }
}

impl Default for UCI {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
