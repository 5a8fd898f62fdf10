/*
game.rs

Copyright 2025 Hervé Quatremain

This file is part of Gridlock.

Gridlock is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Gridlock is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Gridlock. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Save and restore the game in progress when quitting or starting Gridlock.
//!
//! When a game is in progress and the user quits, the game status is saved in the
//! `savegame.json` file.
//! When Gridlock is restarted with the same data directory, the saved game is loaded, and the
//! user can continue the puzzle.
//!
//! The saved object is a serialization of the [`Game`] object in JSON format by using [`serde`].
//! The puzzle is validated while loading, and its solution is computed again and compared to the
//! saved one.

use log::{debug, warn};
use std::error::Error;
use std::fs::{File, create_dir_all, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::config::SAVE_FILE_NAME;
use crate::game::Game;

/// Object to save and restore a puzzle in progress.
pub struct SaverGame {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverGame {
    /// Create a [`SaverGame`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the puzzle must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push(SAVE_FILE_NAME);
        debug!("Save game file: {data_dir:?}");
        SaverGame {
            save_file: data_dir,
        }
    }

    /// Retrieve the [`Game`] object for the saved puzzle.
    ///
    /// Return the [`Game`] object or None if there is no saved puzzle.
    pub fn get_game(&self) -> Result<Option<Game>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let game: Game = serde_json::from_reader(reader)?;
        game.verify()?;
        debug!("{} Restored from {:?}", game.label(), self.save_file);
        Ok(Some(game))
    }

    /// Save the provided [`Game`] object.
    ///
    /// The data directory is created if it does not exist yet.
    pub fn save_game(&self, game: &Game) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent() {
            create_dir_all(dir)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, game)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the saved game.
    pub fn delete_save(&self) {
        if let Err(error) = remove_file(&self.save_file)
            && error.kind() != ErrorKind::NotFound
        {
            warn!("Cannot delete the save file {:?}: {error}", self.save_file);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::rng::GridRng;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_no_saved_game() {
        let dir = tempdir().unwrap();
        let saver = SaverGame::new(dir.path().to_path_buf());
        saver.delete_save();
        assert!(saver.get_game().unwrap().is_none());
    }

    #[test]
    fn test_save_and_restore() {
        let dir = tempdir().unwrap();
        let saver = SaverGame::new(dir.path().to_path_buf());

        let mut game = Game::generate(7, &mut GridRng::new(7)).unwrap();
        game.advance_page();
        let wrong = (game.solution_cell() + 1) % 16;
        game.guess(wrong).unwrap();
        game.advance_page();
        saver.save_game(&game).unwrap();

        let restored = saver.get_game().unwrap().unwrap();
        assert_eq!(restored, game);
        assert_eq!(restored.strikes(), 1);
        assert_eq!(restored.current_page_number(), 2);

        saver.delete_save();
        assert!(saver.get_game().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_data_dir() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().join("missing").join("sub");
        let saver = SaverGame::new(data_dir.clone());

        assert!(saver.get_game().unwrap().is_none());

        let game = Game::generate(11, &mut GridRng::new(11)).unwrap();
        saver.save_game(&game).unwrap();

        assert!(data_dir.join(SAVE_FILE_NAME).is_file());
        assert_eq!(saver.get_game().unwrap(), Some(game));
    }

    #[test]
    fn test_delete_missing_save() {
        let dir = tempdir().unwrap();
        let saver = SaverGame::new(dir.path().join("never-created"));

        saver.delete_save();
        assert!(saver.get_game().unwrap().is_none());
    }

    #[test]
    fn test_tampered_solution_rejected() {
        let dir = tempdir().unwrap();
        let saver = SaverGame::new(dir.path().to_path_buf());

        let game = Game::generate(3, &mut GridRng::new(3)).unwrap();
        let mut value: serde_json::Value = serde_json::to_value(&game).unwrap();
        let cell = game.solution_cell();
        value["solution"]["cell"] = serde_json::json!((cell + 1) % 16);
        fs::write(dir.path().join(SAVE_FILE_NAME), value.to_string()).unwrap();

        assert!(saver.get_game().is_err());
    }
}
