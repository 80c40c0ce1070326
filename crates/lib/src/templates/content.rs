//! Embedded template bodies.
//!
//! Each body is indented to fit the surrounding source and starts with a
//! newline; `util::text::normalize_template` strips both before writing.

pub const ELECTRON_MAIN_JS: &str = r#"
    const { app, BrowserWindow, ipcMain } = require('electron');
    const path = require('path');

    const isDev = !app.isPackaged;

    let mainWindow;

    function createWindow() {
      mainWindow = new BrowserWindow({
        width: 1280,
        height: 800,
        webPreferences: {
          preload: path.join(__dirname, 'preload.js'),
          contextIsolation: true,
          nodeIntegration: false
        }
      });

      if (isDev) {
        mainWindow.loadURL('http://localhost:5173');
        mainWindow.webContents.openDevTools();
      } else {
        mainWindow.loadFile(path.join(__dirname, '../renderer/index.html'));
      }

      mainWindow.on('closed', () => {
        mainWindow = null;
      });
    }

    app.whenReady().then(() => {
      createWindow();

      app.on('activate', () => {
        if (BrowserWindow.getAllWindows().length === 0) createWindow();
      });
    });

    app.on('window-all-closed', () => {
      if (process.platform !== 'darwin') app.quit();
    });

    // пример IPC
    ipcMain.handle('ping', () => 'pong from main');
"#;

pub const ELECTRON_PRELOAD_JS: &str = r#"
    const { contextBridge, ipcRenderer } = require('electron');

    contextBridge.exposeInMainWorld('electronAPI', {
      ping: () => ipcRenderer.invoke('ping')
    });
"#;

pub const APP_TSX: &str = r#"
    import React, { useState } from 'react';

    const App: React.FC = () => {
      const [pingResult, setPingResult] = useState('');

      const handlePing = async () => {
        const res = await window.electronAPI.ping();
        setPingResult(res);
      };

      return (
        <div style={{ padding: 16 }}>
          <h1>Twitch Mod Dashboard</h1>
          <button onClick={handlePing}>Ping main</button>
          <p>{pingResult}</p>
        </div>
      );
    };

    export default App;
"#;

pub const MAIN_TSX: &str = r#"
    import React from 'react';
    import ReactDOM from 'react-dom/client';
    import App from './App';

    ReactDOM.createRoot(document.getElementById('root') as HTMLElement).render(
      <React.StrictMode>
        <App />
      </React.StrictMode>
    );
"#;

pub const VITE_ENV_D_TS: &str = r#"
    interface ElectronAPI {
      ping: () => Promise<string>;
    }

    declare global {
      interface Window {
        electronAPI: ElectronAPI;
      }
    }

    export {};
"#;

pub const TSCONFIG_JSON: &str = r#"
    {
      "compilerOptions": {
        "target": "ESNext",
        "module": "ESNext",
        "jsx": "react-jsx",
        "moduleResolution": "Node",
        "strict": true,
        "esModuleInterop": true,
        "skipLibCheck": true,
        "resolveJsonModule": true,
        "allowSyntheticDefaultImports": true,
        "baseUrl": ".",
        "paths": {
          "@/*": ["src/*"]
        },
        "types": ["vite/client"]
      },
      "include": ["src", "vite.config.ts"]
    }
"#;

pub const VITE_CONFIG_TS: &str = r#"
    import { defineConfig } from 'vite';
    import react from '@vitejs/plugin-react';

    export default defineConfig({
      plugins: [react()],
      build: {
        outDir: 'dist/renderer'
      }
    });
"#;

pub const INDEX_HTML: &str = r#"
    <!doctype html>
    <html lang="en">
      <head>
        <meta charset="UTF-8" />
        <title>Twitch Mod Dashboard</title>
      </head>
      <body>
        <div id="root"></div>
        <script type="module" src="/src/main.tsx"></script>
      </body>
    </html>
"#;
