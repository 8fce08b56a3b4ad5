//! Fixed texts shown by the shell.

/// Command list printed by `-h`.
pub const COMMANDS: &str = r#"
    Available commands you can type:
        -q -> Exits the game.
        -h -> Shows this list of commands.
        -i -> Shows instructions and how to play guide.
        -s -> Choose single player mode.
        -m -> Choose multiplayer mode.
"#;

/// How-to-play guide printed at start and by `-i`.
pub const GAME_GUIDE: &str = r#"
     _   _      _             _
    | | (_)    | |           | |
    | |_ _  ___| |_ __ _  ___| |_ ___   ___
    | __| |/ __| __/ _` |/ __| __/ _ \ / _ \
    | |_| | (__| || (_| | (__| || (_) |  __/
     \__|_|\___|\__\__,_|\___|\__\___/ \___|

    GAMEPLAY:
    The layout of the game is a 3x3 grid, as usual.
    Each cell corresponds to a number.
                                    [1] [2] [3]
                                    [4] [5] [6]
                                    [7] [8] [9]
    To place your mark simply type the number of the cell you wish to fill.
    For example if you type "6" this is what you'd get:
                                    [] [] []
                                    [] [] [X]
                                    [] [] []
    RULES:
    You are X, your friend (or the computer if you chose single player mode) is O.
    Players take turns putting their marks in empty squares. The first player to
    get 3 marks in a row (up, down, across, or diagonally) is the winner.
    When all 9 squares are full, the game is over.

    To see all available commands type "-h"
"#;

/// Mode hint printed once after the guide.
pub const START_MESSAGE: &str = r#"
    To play in SINGLE PLAYER MODE type "-s"
    To play in MULTIPLAYER MODE type "-m"
"#;

/// Prompt shown between commands.
pub const NEXT_COMMAND_PROMPT: &str = "\nType anything: ";

/// Reply to an unknown command.
pub const UNKNOWN_COMMAND: &str = "That is not a valid command.";

/// Goodbye on `-q`.
pub const FAREWELL: &str = "Thanks for playing 👋";
